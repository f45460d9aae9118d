use std::path::PathBuf;

use tracing::warn;

use crate::math::stats::ScoreSummary;
use crate::peptide::PeptideTable;
use crate::schema::v1::PepScoreV1;
use crate::scores::{CountMap, HighScoring, RankedMap, ScaledMap};
use crate::sequence::ParsedGenes;

pub const DEFAULT_PERCENTILE: f64 = 75.0;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub report_path: PathBuf,
    pub rank_csv_path: PathBuf,
    pub scaled_csv_path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub genes_path: PathBuf,
    pub peptides_path: PathBuf,
    pub marker: char,
    pub percentile: f64,
    pub write_json: bool,
    pub genes: Option<ParsedGenes>,
    pub peptides: Option<PeptideTable>,
    pub score_summary: Option<ScoreSummary>,
    pub raw_counts: Option<CountMap>,
    pub high_scoring: Option<HighScoring>,
    pub high_counts: Option<CountMap>,
    /// Every scalable gene, gene file order.
    pub scaled: Option<ScaledMap>,
    /// Non-zero scaled genes, descending.
    pub ranked_scaled: Option<ScaledMap>,
    pub ranked: Option<RankedMap>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: PepScoreV1,
}

impl Ctx {
    pub fn new(
        genes_path: PathBuf,
        peptides_path: PathBuf,
        out_dir: PathBuf,
        marker: char,
        percentile: f64,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        let report = PepScoreV1::empty(
            tool_version,
            &genes_path.display().to_string(),
            &peptides_path.display().to_string(),
            marker,
        );
        Self {
            genes_path,
            peptides_path,
            marker,
            percentile,
            write_json,
            genes: None,
            peptides: None,
            score_summary: None,
            raw_counts: None,
            high_scoring: None,
            high_counts: None,
            scaled: None,
            ranked_scaled: None,
            ranked: None,
            warnings: Vec::new(),
            output: OutputPaths {
                report_path: out_dir.join("report.txt"),
                rank_csv_path: out_dir.join("rank.csv"),
                scaled_csv_path: out_dir.join("scaled.csv"),
                json_path: out_dir.join("pepscore.json"),
                out_dir,
            },
            report,
        }
    }

    pub fn push_warning(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }

    pub fn genes(&self) -> anyhow::Result<&ParsedGenes> {
        self.genes
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("gene records not loaded"))
    }

    pub fn peptides(&self) -> anyhow::Result<&PeptideTable> {
        self.peptides
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("peptide table not loaded"))
    }
}
