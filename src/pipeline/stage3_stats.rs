use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::math::stats;
use crate::pipeline::Stage;

pub struct Stage3Stats;

impl Stage3Stats {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Stats {
    fn name(&self) -> &'static str {
        "stage3_stats"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let summary = stats::summarize(&ctx.peptides()?.scores)?;
        info!(
            min = summary.min,
            max = summary.max,
            median = summary.median,
            p75 = summary.p75,
            "score_statistics"
        );
        ctx.score_summary = Some(summary);
        Ok(())
    }
}
