use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::scale_counts;

pub struct Stage7Scale;

impl Stage7Scale {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Scale {
    fn name(&self) -> &'static str {
        "stage7_scale"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let counts = ctx
            .high_counts
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("high counts missing before Stage 7"))?;
        let lengths = ctx.genes()?.lengths();
        let outcome = scale_counts(counts, &lengths);

        for id in &outcome.skipped {
            ctx.push_warning(format!("gene '{}' has zero length; not scaled", id));
        }
        info!(
            scaled = outcome.scaled.len(),
            skipped = outcome.skipped.len(),
            "scaled_ready"
        );
        ctx.scaled = Some(outcome.scaled);
        Ok(())
    }
}
