use kira_pepscore::math::stats::{max, mean, median, min, percentile, summarize};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn median_odd_even() {
    assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
    assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]).unwrap(), 2.5);
}

#[test]
fn percentile_linear_interpolation() {
    // h = (3 - 1) * 0.75 = 1.5 -> halfway between 5 and 10
    assert!(close(percentile(&[10.0, 5.0, 1.0], 75.0).unwrap(), 7.5));
    // h = 3 * 0.75 = 2.25 -> 3 + 0.25 * (4 - 3)
    assert!(close(percentile(&[1.0, 2.0, 3.0, 4.0], 75.0).unwrap(), 3.25));
    assert!(close(percentile(&[7.0], 75.0).unwrap(), 7.0));
    assert!(close(percentile(&[1.0, 2.0, 3.0, 4.0], 0.0).unwrap(), 1.0));
    assert!(close(percentile(&[1.0, 2.0, 3.0, 4.0], 100.0).unwrap(), 4.0));
}

#[test]
fn percentile_out_of_range_rejected() {
    assert!(percentile(&[1.0, 2.0], 101.0).is_err());
    assert!(percentile(&[1.0, 2.0], -1.0).is_err());
}

#[test]
fn min_max_mean_basic() {
    let v = [4.0, -1.0, 9.5, 2.5];
    assert_eq!(min(&v).unwrap(), -1.0);
    assert_eq!(max(&v).unwrap(), 9.5);
    assert!(close(mean(&v).unwrap(), 3.75));
}

#[test]
fn empty_input_is_an_error() {
    assert!(min(&[]).is_err());
    assert!(max(&[]).is_err());
    assert!(mean(&[]).is_err());
    assert!(median(&[]).is_err());
    assert!(percentile(&[], 75.0).is_err());
    assert!(summarize(&[]).is_err());
}

#[test]
fn statistics_are_ordered() {
    let lists: [&[f64]; 4] = [
        &[1.0],
        &[3.0, 3.0, 3.0],
        &[10.0, 5.0, 1.0, 8.0, 2.0],
        &[0.5, 100.0, -4.0, 17.25, 6.0, 6.0],
    ];
    for v in lists {
        let s = summarize(v).unwrap();
        let p25 = percentile(v, 25.0).unwrap();
        assert!(s.min <= p25, "{:?}", v);
        assert!(p25 <= s.median, "{:?}", v);
        assert!(s.median <= s.p75, "{:?}", v);
        assert!(s.p75 <= s.max, "{:?}", v);
    }
}
