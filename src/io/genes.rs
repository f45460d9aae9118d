use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::sequence::{ParsedGenes, parse_gene_text};

/// Read a marker-delimited gene file, gunzipping `.gz` paths.
pub fn read_gene_file(path: &Path, marker: char) -> Result<ParsedGenes> {
    let mut reader = super::open_maybe_gz(path)?;
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read gene file {}", path.display()))?;
    Ok(parse_gene_text(&content, marker))
}
