use std::fs;

use kira_pepscore::peptide::{Peptide, PeptideTable, load_peptide_csv, parse_peptide_csv};
use tempfile::TempDir;

#[test]
fn parses_columns_in_order() {
    let csv = "peptide,score\nACD,10\nGGG,5\nXYZ,1.5\n";
    let table = parse_peptide_csv(csv.as_bytes(), "mem").unwrap();
    assert_eq!(table.peptides, vec!["ACD", "GGG", "XYZ"]);
    assert_eq!(table.scores, vec![10.0, 5.0, 1.5]);
    assert_eq!(table.lookup["GGG"], 5.0);
    assert_eq!(table.len(), 3);
}

#[test]
fn columns_found_by_name() {
    let csv = "score,note,peptide\n3,x,AAA\n";
    let table = parse_peptide_csv(csv.as_bytes(), "mem").unwrap();
    assert_eq!(table.peptides, vec!["AAA"]);
    assert_eq!(table.scores, vec![3.0]);
}

#[test]
fn missing_column_is_an_error() {
    let err = parse_peptide_csv("peptide,value\nAAA,1\n".as_bytes(), "mem").unwrap_err();
    assert!(err.to_string().contains("missing 'score' column"));
    let err = parse_peptide_csv("seq,score\nAAA,1\n".as_bytes(), "mem").unwrap_err();
    assert!(err.to_string().contains("missing 'peptide' column"));
}

#[test]
fn bad_rows_are_errors() {
    assert!(parse_peptide_csv("peptide,score\nAAA,high\n".as_bytes(), "mem").is_err());
    assert!(parse_peptide_csv("peptide,score\n,1\n".as_bytes(), "mem").is_err());
    assert!(parse_peptide_csv("peptide,score\nAAA,NaN\n".as_bytes(), "mem").is_err());
    assert!(parse_peptide_csv("peptide,score\n".as_bytes(), "mem").is_err());
}

#[test]
fn duplicate_peptide_last_score_wins() {
    let table = PeptideTable::from_rows(vec![
        Peptide {
            sequence: "AAA".to_string(),
            score: 1.0,
        },
        Peptide {
            sequence: "BBB".to_string(),
            score: 2.0,
        },
        Peptide {
            sequence: "AAA".to_string(),
            score: 9.0,
        },
    ]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup.len(), 2);
    assert_eq!(table.lookup["AAA"], 9.0);
    assert_eq!(table.lookup.get_index(0).unwrap().0, "AAA");
    assert_eq!(table.duplicate_peptides(), vec!["AAA"]);
}

#[test]
fn load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("peptide-scores.csv");
    fs::write(&path, "peptide,score\nMKV,4\n").unwrap();
    let table = load_peptide_csv(&path).unwrap();
    assert_eq!(table.peptides, vec!["MKV"]);
    assert!(load_peptide_csv(&tmp.path().join("missing.csv")).is_err());
}
