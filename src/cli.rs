use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::ctx::DEFAULT_PERCENTILE;
use crate::sequence::DEFAULT_MARKER;

#[derive(Debug, Parser)]
#[command(
    name = "kira-pepscore",
    version,
    about = "Rank genes by high-scoring peptide content per unit length"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Gene file with marker-prefixed headers (.gz accepted)")]
    pub genes: PathBuf,

    #[arg(long, help = "Peptide CSV with 'peptide' and 'score' columns")]
    pub peptides: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = DEFAULT_MARKER, help = "Header marker character")]
    pub marker: char,

    #[arg(
        long,
        default_value_t = DEFAULT_PERCENTILE,
        value_parser = parse_percentile,
        help = "Score percentile a peptide must reach to count as high-scoring"
    )]
    pub percentile: f64,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub genes: PathBuf,

    #[arg(long)]
    pub peptides: PathBuf,

    #[arg(long, default_value_t = DEFAULT_MARKER)]
    pub marker: char,
}

fn parse_percentile(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !(0.0..=100.0).contains(&p) {
        return Err(format!("percentile must be within 0..=100, got {}", p));
    }
    Ok(p)
}
