use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{csv_writer, json_writer, summary};
use crate::pipeline::Stage;

pub struct Stage9Output;

impl Stage9Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage9Output {
    fn name(&self) -> &'static str {
        "stage9_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let ranked = ctx.ranked.as_ref().context("ranks missing")?;
        let scaled = ctx
            .ranked_scaled
            .as_ref()
            .context("scaled scores missing")?;

        csv_writer::write_rank_csv(&ctx.output.rank_csv_path, ranked)?;
        csv_writer::write_scaled_csv(&ctx.output.scaled_csv_path, scaled)?;
        summary::write_summary(&ctx.output.report_path, ctx)?;

        let report = json_writer::build_report(ctx)?;
        ctx.report = report;
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
        }

        info!(out_dir = %ctx.output.out_dir.display(), "stage9_output_ready");
        Ok(())
    }
}
