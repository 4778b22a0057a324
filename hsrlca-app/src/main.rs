use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

mod config;
mod plotting;
mod workflow;

/// Life-cycle impacts of high-speed rail per passenger-km, one run per trade scenario.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML model file naming the data files, parameters and scenarios
    #[arg(short, long, value_name = "model.yaml")]
    config: PathBuf,

    /// Directory under which a timestamped run directory is created
    #[arg(short, long, default_value = "./data/runs")]
    output_dir: PathBuf,

    /// Report every pipeline stage
    #[arg(short, long)]
    verbose: bool,

    /// Fail on unbalanced energy mixes and unclassified emissions instead of warning
    #[arg(long)]
    strict: bool,

    /// Skip chart rendering
    #[arg(long)]
    no_plots: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    println!("--- HSR LCA ---");

    let config = config::ModelConfig::load(&cli.config)?;

    let output_dir = cli
        .output_dir
        .join(format!("hsrlca_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    // Copy the model file to the output directory for traceability
    fs::copy(&cli.config, output_dir.join("model.yaml"))
        .with_context(|| format!("Failed to copy {:?} into {:?}", cli.config, output_dir))?;

    let runs = workflow::run_scenarios(&config, &output_dir, cli.verbose, cli.strict)?;
    workflow::report_comparison(&runs, &output_dir)?;

    if !cli.no_plots {
        plotting::generate_all_plots(&output_dir, &runs)?;
    }

    println!("\nAll scenarios complete. Results are in {:?}", output_dir);
    Ok(())
}
