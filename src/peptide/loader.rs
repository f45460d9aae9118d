use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::{PEPTIDE_COLUMN, Peptide, PeptideTable, SCORE_COLUMN};

pub fn load_peptide_csv(path: &Path) -> Result<PeptideTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open peptide table {}", path.display()))?;
    parse_peptide_csv(file, &path.display().to_string())
}

/// Read a CSV with a header row naming `peptide` and `score` columns.
/// Other columns are ignored.
pub fn parse_peptide_csv<R: Read>(input: R, source: &str) -> Result<PeptideTable> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader
        .headers()
        .with_context(|| format!("{}: reading CSV header", source))?
        .clone();

    let pep_idx = headers
        .iter()
        .position(|h| h.trim() == PEPTIDE_COLUMN)
        .with_context(|| format!("{}: missing '{}' column", source, PEPTIDE_COLUMN))?;
    let score_idx = headers
        .iter()
        .position(|h| h.trim() == SCORE_COLUMN)
        .with_context(|| format!("{}: missing '{}' column", source, SCORE_COLUMN))?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // header is line 1
        let line_no = idx + 2;
        let record = result.with_context(|| format!("{}:{} malformed CSV row", source, line_no))?;

        let sequence = record.get(pep_idx).unwrap_or("").trim();
        if sequence.is_empty() {
            bail!("{}:{} empty peptide", source, line_no);
        }
        let raw_score = record.get(score_idx).unwrap_or("").trim();
        let score: f64 = raw_score.parse().with_context(|| {
            format!("{}:{} score '{}' is not a number", source, line_no, raw_score)
        })?;
        if !score.is_finite() {
            bail!("{}:{} score '{}' is not finite", source, line_no, raw_score);
        }

        rows.push(Peptide {
            sequence: sequence.to_string(),
            score,
        });
    }

    if rows.is_empty() {
        bail!("{}: peptide table has no rows", source);
    }

    Ok(PeptideTable::from_rows(rows))
}
