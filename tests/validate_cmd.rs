use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("genes.fa"), ">A\nACDEFACDEF\n>B\nGGGG\n").unwrap();
    fs::write(tmp.path().join("peptides.csv"), "peptide,score\nACD,10\nGGG,5\n").unwrap();

    let mut cmd = Command::cargo_bin("kira-pepscore").unwrap();
    cmd.arg("validate")
        .arg("--genes")
        .arg(tmp.path().join("genes.fa"))
        .arg("--peptides")
        .arg(tmp.path().join("peptides.csv"));
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("genes: 2"));
    assert!(stdout.contains("peptides: 2"));
}

#[test]
fn validate_empty_peptides_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("genes.fa"), ">A\nACD\n").unwrap();
    fs::write(tmp.path().join("peptides.csv"), "peptide,score\n").unwrap();

    let mut cmd = Command::cargo_bin("kira-pepscore").unwrap();
    cmd.arg("validate")
        .arg("--genes")
        .arg(tmp.path().join("genes.fa"))
        .arg("--peptides")
        .arg(tmp.path().join("peptides.csv"));
    cmd.assert().failure();
}
