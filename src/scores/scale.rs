use indexmap::IndexMap;

use super::{CountMap, ScaledMap};

#[derive(Debug, Clone, Default)]
pub struct ScaleOutcome {
    pub scaled: ScaledMap,
    /// Genes left out of `scaled`: no known length, or a zero-length sequence.
    pub skipped: Vec<String>,
}

/// Divide each gene's count by its sequence length in characters.
pub fn scale_counts(counts: &CountMap, lengths: &IndexMap<String, usize>) -> ScaleOutcome {
    let mut out = ScaleOutcome {
        scaled: ScaledMap::with_capacity(counts.len()),
        skipped: Vec::new(),
    };
    for (id, count) in counts {
        match lengths.get(id) {
            Some(&len) if len > 0 => {
                out.scaled.insert(id.clone(), *count as f64 / len as f64);
            }
            _ => out.skipped.push(id.clone()),
        }
    }
    out
}
