use anyhow::Result;

use crate::math::stats;
use crate::peptide::PeptideTable;

#[derive(Debug, Clone, PartialEq)]
pub struct HighScoring {
    pub percentile: f64,
    pub threshold: f64,
    pub peptides: Vec<String>,
}

/// Score values at or above `threshold`, in table order.
pub fn qualifying_scores(scores: &[f64], threshold: f64) -> Vec<f64> {
    scores.iter().copied().filter(|s| *s >= threshold).collect()
}

/// Peptides whose looked-up score is one of the qualifying score values.
///
/// Membership is by score value, so every peptide sharing a qualifying
/// score passes. Output follows the lookup's first-seen order.
pub fn high_scoring_peptides(table: &PeptideTable, percentile: f64) -> Result<HighScoring> {
    let threshold = stats::percentile(&table.scores, percentile)?;
    let qualifying = qualifying_scores(&table.scores, threshold);
    let peptides = table
        .lookup
        .iter()
        .filter(|(_, score)| qualifying.contains(*score))
        .map(|(pep, _)| pep.clone())
        .collect();

    Ok(HighScoring {
        percentile,
        threshold,
        peptides,
    })
}
