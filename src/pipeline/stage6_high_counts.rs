use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::count_map;

/// Occurrence counts restricted to the high-scoring peptides.
pub struct Stage6HighCounts;

impl Stage6HighCounts {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6HighCounts {
    fn name(&self) -> &'static str {
        "stage6_high_counts"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let high = ctx
            .high_scoring
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("high-scoring peptides not selected before Stage 6"))?;
        let counts = count_map(&high.peptides, &ctx.genes()?.records);
        let matched = counts.values().filter(|c| **c > 0).count();
        info!(genes = counts.len(), matched, "high_counts_ready");
        ctx.high_counts = Some(counts);
        Ok(())
    }
}
