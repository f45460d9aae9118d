use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub genes_path: String,
    pub peptides_path: String,
    pub marker: char,
    /// Header lines seen, including those without a sequence.
    pub headers: Option<u64>,
    pub genes: Option<u64>,
    pub peptides: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p75: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoringMeta {
    pub percentile: f64,
    pub threshold: f64,
    pub peptides: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneScore {
    pub name: String,
    pub length: u64,
    pub raw_count: u64,
    pub high_count: u64,
    pub scaled: Option<f64>,
    pub rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PepScoreV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub statistics: Option<ScoreStatistics>,
    pub high_scoring: Option<HighScoringMeta>,
    pub genes: Vec<GeneScore>,
    pub warnings: Vec<String>,
}

impl PepScoreV1 {
    pub fn empty(tool_version: &str, genes_path: &str, peptides_path: &str, marker: char) -> Self {
        Self {
            tool: "kira-pepscore".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                genes_path: genes_path.to_string(),
                peptides_path: peptides_path.to_string(),
                marker,
                headers: None,
                genes: None,
                peptides: None,
            },
            statistics: None,
            high_scoring: None,
            genes: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
