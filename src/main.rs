use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_pepscore::cli::{Cli, Commands, RunArgs, ValidateArgs};
use kira_pepscore::ctx::{Ctx, DEFAULT_PERCENTILE};
use kira_pepscore::io;
use kira_pepscore::pipeline::Pipeline;
use kira_pepscore::pipeline::stage1_genes::Stage1Genes;
use kira_pepscore::pipeline::stage2_peptides::Stage2Peptides;
use kira_pepscore::pipeline::stage3_stats::Stage3Stats;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Validate(args) => validate(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.genes,
        args.peptides,
        args.out,
        args.marker,
        args.percentile,
        args.json,
        env!("CARGO_PKG_VERSION"),
    );
    Pipeline::full().run(&mut ctx)?;

    print!("{}", io::summary::format_summary(&ctx)?);
    print_warnings(&ctx);
    Ok(())
}

fn validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.genes,
        args.peptides,
        PathBuf::from("."),
        args.marker,
        DEFAULT_PERCENTILE,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Genes::new()),
        Box::new(Stage2Peptides::new()),
        Box::new(Stage3Stats::new()),
    ]);
    pipeline.run(&mut ctx)?;

    let genes = ctx.genes()?;
    let peptides = ctx.peptides()?;
    println!("kira-pepscore validate ok");
    println!("headers: {}", genes.headers.len());
    println!("genes: {}", genes.records.len());
    println!("peptides: {}", peptides.len());
    if let Some(stats) = &ctx.score_summary {
        println!(
            "scores: min={} max={} median={} mean={} p75={}",
            stats.min, stats.max, stats.median, stats.mean, stats.p75
        );
    }
    print_warnings(&ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
