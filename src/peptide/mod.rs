mod loader;

use std::collections::HashSet;

use indexmap::IndexMap;

pub use loader::{load_peptide_csv, parse_peptide_csv};

pub const PEPTIDE_COLUMN: &str = "peptide";
pub const SCORE_COLUMN: &str = "score";

#[derive(Debug, Clone, PartialEq)]
pub struct Peptide {
    pub sequence: String,
    pub score: f64,
}

/// Reference peptides as parallel columns plus a peptide -> score lookup.
///
/// The lookup keeps first-seen order; a repeated peptide overwrites the
/// earlier score in place.
#[derive(Debug, Clone, Default)]
pub struct PeptideTable {
    pub peptides: Vec<String>,
    pub scores: Vec<f64>,
    pub lookup: IndexMap<String, f64>,
}

impl PeptideTable {
    pub fn from_rows(rows: Vec<Peptide>) -> Self {
        let mut table = PeptideTable {
            peptides: Vec::with_capacity(rows.len()),
            scores: Vec::with_capacity(rows.len()),
            lookup: IndexMap::with_capacity(rows.len()),
        };
        for row in rows {
            table.lookup.insert(row.sequence.clone(), row.score);
            table.peptides.push(row.sequence);
            table.scores.push(row.score);
        }
        table
    }

    pub fn len(&self) -> usize {
        self.peptides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peptides.is_empty()
    }

    /// Peptides that occur more than once in the table, first repeat order.
    pub fn duplicate_peptides(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut out = Vec::new();
        for pep in &self.peptides {
            if !seen.insert(pep.as_str()) && reported.insert(pep.as_str()) {
                out.push(pep.as_str());
            }
        }
        out
    }
}
