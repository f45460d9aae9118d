use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{GeneScore, HighScoringMeta, PepScoreV1, ScoreStatistics};
use crate::sequence::strip_marker;

pub fn build_report(ctx: &Ctx) -> Result<PepScoreV1> {
    let mut report = ctx.report.clone();
    let genes = ctx.genes()?;
    let peptides = ctx.peptides()?;

    report.input_meta.headers = Some(genes.headers.len() as u64);
    report.input_meta.genes = Some(genes.records.len() as u64);
    report.input_meta.peptides = Some(peptides.len() as u64);

    report.statistics = ctx.score_summary.as_ref().map(|s| ScoreStatistics {
        min: s.min,
        max: s.max,
        mean: s.mean,
        median: s.median,
        p75: s.p75,
    });
    report.high_scoring = ctx.high_scoring.as_ref().map(|h| HighScoringMeta {
        percentile: h.percentile,
        threshold: h.threshold,
        peptides: h.peptides.clone(),
    });

    let raw_counts = ctx.raw_counts.as_ref().context("raw counts missing")?;
    let high_counts = ctx.high_counts.as_ref().context("high counts missing")?;
    let scaled = ctx.scaled.as_ref().context("scaled scores missing")?;
    let ranked = ctx.ranked.as_ref().context("ranks missing")?;
    let lengths = genes.lengths();

    report.genes = raw_counts
        .iter()
        .map(|(id, raw)| GeneScore {
            name: strip_marker(id).to_string(),
            length: lengths.get(id).copied().unwrap_or(0) as u64,
            raw_count: *raw,
            high_count: high_counts.get(id).copied().unwrap_or(0),
            scaled: scaled.get(id).copied(),
            rank: ranked.get(id).copied(),
        })
        .collect();
    report.warnings = ctx.warnings.clone();

    Ok(report)
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
