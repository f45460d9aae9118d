use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::count_map;

/// Occurrence counts against the full peptide set.
pub struct Stage4Counts;

impl Stage4Counts {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Counts {
    fn name(&self) -> &'static str {
        "stage4_counts"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let counts = count_map(&ctx.peptides()?.peptides, &ctx.genes()?.records);
        info!(genes = counts.len(), "raw_counts_ready");
        ctx.raw_counts = Some(counts);
        Ok(())
    }
}
