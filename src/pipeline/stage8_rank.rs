use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::{rank_genes, sort_and_prune};

pub struct Stage8Rank;

impl Stage8Rank {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage8Rank {
    fn name(&self) -> &'static str {
        "stage8_rank"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let scaled = ctx
            .scaled
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("scaled scores missing before Stage 8"))?;
        let sorted = sort_and_prune(scaled);
        let ranked = rank_genes(&sorted);
        info!(
            ranked = ranked.len(),
            dropped_zero = scaled.len() - sorted.len(),
            "ranks_ready"
        );
        ctx.ranked_scaled = Some(sorted);
        ctx.ranked = Some(ranked);
        Ok(())
    }
}
