use indexmap::IndexMap;
use kira_pepscore::scores::{CountMap, scale_counts};

#[test]
fn divides_count_by_length() {
    let mut counts = CountMap::new();
    counts.insert(">A".to_string(), 2);
    counts.insert(">B".to_string(), 0);
    let mut lengths = IndexMap::new();
    lengths.insert(">A".to_string(), 10);
    lengths.insert(">B".to_string(), 4);

    let out = scale_counts(&counts, &lengths);
    assert!(out.skipped.is_empty());
    assert!((out.scaled[">A"] - 0.2).abs() < 1e-12);
    assert_eq!(out.scaled[">B"], 0.0);
}

#[test]
fn zero_length_and_unknown_genes_are_skipped() {
    let mut counts = CountMap::new();
    counts.insert(">A".to_string(), 3);
    counts.insert(">EMPTY".to_string(), 1);
    counts.insert(">GHOST".to_string(), 1);
    let mut lengths = IndexMap::new();
    lengths.insert(">A".to_string(), 6);
    lengths.insert(">EMPTY".to_string(), 0);

    let out = scale_counts(&counts, &lengths);
    assert_eq!(out.scaled.len(), 1);
    assert_eq!(out.scaled[">A"], 0.5);
    assert_eq!(out.skipped, vec![">EMPTY".to_string(), ">GHOST".to_string()]);
}
