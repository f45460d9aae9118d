use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::high_scoring_peptides;

pub struct Stage5Filter;

impl Stage5Filter {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Filter {
    fn name(&self) -> &'static str {
        "stage5_filter"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let high = high_scoring_peptides(ctx.peptides()?, ctx.percentile)?;
        info!(
            percentile = high.percentile,
            threshold = high.threshold,
            peptides = high.peptides.len(),
            "high_scoring_selected"
        );
        ctx.high_scoring = Some(high);
        Ok(())
    }
}
