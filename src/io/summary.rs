use std::fmt::Display;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;

use crate::ctx::Ctx;
use crate::sequence::strip_marker;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let genes = ctx.genes()?;
    let peptides = ctx.peptides()?;
    let stats = ctx
        .score_summary
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("score statistics missing"))?;
    let high = ctx
        .high_scoring
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("high-scoring peptides missing"))?;
    let raw_counts = ctx.raw_counts.as_ref().context("raw counts missing")?;
    let high_counts = ctx.high_counts.as_ref().context("high counts missing")?;
    let scaled = ctx
        .ranked_scaled
        .as_ref()
        .context("scaled scores missing")?;
    let ranked = ctx.ranked.as_ref().context("ranks missing")?;

    let mut out = String::new();
    writeln!(out, "kira-pepscore v{}", version)?;
    writeln!(
        out,
        "Input: {} genes ({} headers), {} peptides",
        genes.records.len(),
        genes.headers.len(),
        peptides.len()
    )?;
    writeln!(
        out,
        "P{} score: {} ({} high-scoring peptides)",
        high.percentile,
        high.threshold,
        high.peptides.len()
    )?;
    writeln!(out, "Minimum:\t{}", stats.min)?;
    writeln!(out, "Maximum:\t{}", stats.max)?;
    writeln!(out, "Median:\t{}", stats.median)?;
    writeln!(out, "Mean:\t{}", stats.mean)?;

    write_section(&mut out, "peptide counts", raw_counts)?;
    write_section(&mut out, "high-scoring peptide counts", high_counts)?;
    write_section(&mut out, "scaled", scaled)?;
    write_section(&mut out, "ranks", ranked)?;

    Ok(out)
}

pub fn write_summary(path: &Path, ctx: &Ctx) -> Result<()> {
    let text = format_summary(ctx)?;
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn write_section<V: Display>(
    out: &mut String,
    title: &str,
    values: &IndexMap<String, V>,
) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}:", title)?;
    if values.is_empty() {
        writeln!(out, "(none)")?;
    }
    for (id, v) in values {
        writeln!(out, "{}\t{}", strip_marker(id), v)?;
    }
    Ok(())
}
