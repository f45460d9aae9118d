use kira_pepscore::math::stats::percentile;
use kira_pepscore::peptide::{Peptide, PeptideTable};
use kira_pepscore::scores::{high_scoring_peptides, qualifying_scores};

fn table(rows: &[(&str, f64)]) -> PeptideTable {
    PeptideTable::from_rows(
        rows.iter()
            .map(|(p, s)| Peptide {
                sequence: p.to_string(),
                score: *s,
            })
            .collect(),
    )
}

#[test]
fn selects_scores_at_or_above_threshold() {
    let t = table(&[("ACD", 10.0), ("GGG", 5.0), ("XYZ", 1.0)]);
    let high = high_scoring_peptides(&t, 75.0).unwrap();
    assert!((high.threshold - 7.5).abs() < 1e-9);
    assert_eq!(high.peptides, vec!["ACD"]);
}

#[test]
fn shared_score_values_all_pass() {
    let t = table(&[
        ("P1", 9.0),
        ("P2", 1.0),
        ("P3", 9.0),
        ("P4", 2.0),
        ("P5", 3.0),
    ]);
    let high = high_scoring_peptides(&t, 75.0).unwrap();
    assert_eq!(high.threshold, 9.0);
    assert_eq!(high.peptides, vec!["P1", "P3"]);
}

#[test]
fn output_is_exactly_the_peptides_over_threshold() {
    let t = table(&[
        ("A", 3.0),
        ("B", 8.0),
        ("C", 1.0),
        ("D", 6.5),
        ("E", 8.0),
        ("F", 2.0),
        ("G", 7.0),
    ]);
    let high = high_scoring_peptides(&t, 75.0).unwrap();
    let p75 = percentile(&t.scores, 75.0).unwrap();
    for (pep, score) in &t.lookup {
        assert_eq!(
            high.peptides.contains(pep),
            *score >= p75,
            "peptide {} score {}",
            pep,
            score
        );
    }
    // threshold 7.5 sits between 7 and 8
    assert_eq!(high.peptides, vec!["B", "E"]);
}

#[test]
fn qualifying_scores_keep_table_order() {
    assert_eq!(qualifying_scores(&[1.0, 5.0, 3.0, 5.0], 3.0), vec![5.0, 3.0, 5.0]);
}

#[test]
fn empty_table_is_an_error() {
    let t = table(&[]);
    assert!(high_scoring_peptides(&t, 75.0).is_err());
}
