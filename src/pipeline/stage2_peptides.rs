use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::peptide::load_peptide_csv;
use crate::pipeline::Stage;

pub struct Stage2Peptides;

impl Stage2Peptides {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Peptides {
    fn name(&self) -> &'static str {
        "stage2_peptides"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = load_peptide_csv(&ctx.peptides_path)?;

        let duplicates: Vec<String> = table
            .duplicate_peptides()
            .into_iter()
            .map(|pep| format!("duplicate peptide '{}' (last score wins)", pep))
            .collect();
        for w in duplicates {
            ctx.push_warning(w);
        }

        info!(peptides = table.len(), "peptides_loaded");
        ctx.peptides = Some(table);
        Ok(())
    }
}
