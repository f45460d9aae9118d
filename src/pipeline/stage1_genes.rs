use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::genes::read_gene_file;
use crate::pipeline::Stage;

pub struct Stage1Genes;

impl Stage1Genes {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Genes {
    fn name(&self) -> &'static str {
        "stage1_genes"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let parsed = read_gene_file(&ctx.genes_path, ctx.marker)?;

        let mut warnings = Vec::new();
        if !parsed.counts_match() {
            warnings.push(format!(
                "{} headers but {} sequences; headers without a sequence are skipped",
                parsed.headers.len(),
                parsed.records.len()
            ));
        }
        for header in parsed.dropped_headers() {
            warnings.push(format!("header '{}' has no sequence", header));
        }
        for id in parsed.duplicate_ids() {
            warnings.push(format!(
                "duplicate header '{}' (later sequence replaces earlier)",
                id
            ));
        }
        for w in warnings {
            ctx.push_warning(w);
        }

        info!(
            headers = parsed.headers.len(),
            genes = parsed.records.len(),
            "genes_loaded"
        );
        ctx.genes = Some(parsed);
        Ok(())
    }
}
