use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_genes;
pub mod stage2_peptides;
pub mod stage3_stats;
pub mod stage4_counts;
pub mod stage5_filter;
pub mod stage6_high_counts;
pub mod stage7_scale;
pub mod stage8_rank;
pub mod stage9_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Every stage, inputs through written outputs.
    pub fn full() -> Self {
        let mut stages: Vec<Box<dyn Stage>> = vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_genes::Stage1Genes::new()),
            Box::new(stage2_peptides::Stage2Peptides::new()),
        ];
        stages.extend(Self::scoring_stages());
        stages.push(Box::new(stage9_output::Stage9Output::new()));
        Self::new(stages)
    }

    /// Stages that work on an already populated `Ctx` and touch no files.
    pub fn scoring() -> Self {
        Self::new(Self::scoring_stages())
    }

    fn scoring_stages() -> Vec<Box<dyn Stage>> {
        vec![
            Box::new(stage3_stats::Stage3Stats::new()),
            Box::new(stage4_counts::Stage4Counts::new()),
            Box::new(stage5_filter::Stage5Filter::new()),
            Box::new(stage6_high_counts::Stage6HighCounts::new()),
            Box::new(stage7_scale::Stage7Scale::new()),
            Box::new(stage8_rank::Stage8Rank::new()),
        ]
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
