mod parser;

use indexmap::IndexMap;

pub use parser::parse_gene_text;

pub const DEFAULT_MARKER: char = '>';

/// One header line paired with the sequence body that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRecord {
    /// Raw header line, marker included.
    pub id: String,
    pub sequence: String,
}

impl GeneRecord {
    /// Header with its leading marker character stripped.
    pub fn name(&self) -> &str {
        strip_marker(&self.id)
    }

    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedGenes {
    /// Every header line seen, in file order.
    pub headers: Vec<String>,
    /// Headers that received at least one sequence line, in file order.
    pub records: Vec<GeneRecord>,
}

impl ParsedGenes {
    /// Headers with no sequence body before the next header or EOF.
    pub fn dropped_headers(&self) -> Vec<&str> {
        let mut committed = self.records.iter().peekable();
        let mut dropped = Vec::new();
        for header in &self.headers {
            match committed.peek() {
                Some(rec) if rec.id == *header => {
                    committed.next();
                }
                _ => dropped.push(header.as_str()),
            }
        }
        dropped
    }

    /// Sequence length per header; a repeated header takes the later record.
    pub fn lengths(&self) -> IndexMap<String, usize> {
        self.records
            .iter()
            .map(|rec| (rec.id.clone(), rec.len()))
            .collect()
    }

    /// Headers that appear on more than one committed record.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen: IndexMap<&str, usize> = IndexMap::new();
        for rec in &self.records {
            *seen.entry(rec.id.as_str()).or_default() += 1;
        }
        seen.into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn counts_match(&self) -> bool {
        self.headers.len() == self.records.len()
    }
}

pub fn strip_marker(id: &str) -> &str {
    let mut chars = id.chars();
    chars.next();
    chars.as_str()
}
