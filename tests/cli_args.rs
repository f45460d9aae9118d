use clap::Parser;
use kira_pepscore::cli::{Cli, Commands};

#[test]
fn run_defaults() {
    let cli = Cli::parse_from([
        "kira-pepscore",
        "run",
        "--genes",
        "genes.fa",
        "--peptides",
        "peptide-scores.csv",
        "--out",
        "out",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.marker, '>');
            assert_eq!(args.percentile, 75.0);
            assert!(!args.json);
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn percentile_out_of_range_rejected() {
    let res = Cli::try_parse_from([
        "kira-pepscore",
        "run",
        "--genes",
        "g",
        "--peptides",
        "p",
        "--out",
        "o",
        "--percentile",
        "120",
    ]);
    assert!(res.is_err());
}
