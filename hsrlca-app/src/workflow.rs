use crate::config::ModelConfig;
use anyhow::{Context, Result};
use hsrlca_core::{
    report::ReportWriter,
    scenario::{ScenarioBuilder, ScenarioResults, StageImpact},
};
use std::path::Path;

/// Runs every scenario of the model and writes its reports under `output_dir/<scenario>`.
pub fn run_scenarios(
    config: &ModelConfig,
    output_dir: &Path,
    verbose: bool,
    strict: bool,
) -> Result<Vec<(String, ScenarioResults)>> {
    let base = config.load_base_data()?;
    let sources = config.electricity_sources();
    let strict = strict || config.model.strict;

    let mut runs = Vec::with_capacity(config.model.scenarios.len());
    for definition in &config.model.scenarios {
        println!("\n--- [Workflow] Scenario '{}' ({}) ---", definition.name, definition.home_country);

        let scenario = ScenarioBuilder::new()
            .with_home_country(definition.home_country.as_str())
            .with_base_data(base.clone())
            .with_producing_countries(config.load_producing_countries(definition)?)
            .with_rail_allocation(config.rail_allocation(definition))
            .with_normalization(config.model.normalization.clone())
            .with_electricity_sources(sources.clone())
            .verbose(verbose)
            .strict(strict)
            .build()
            .with_context(|| format!("Invalid configuration for scenario '{}'", definition.name))?;

        let results = scenario
            .run()
            .with_context(|| format!("Scenario '{}' failed", definition.name))?;

        let writer = ReportWriter::new(output_dir.join(&definition.name))?;
        let written = writer.write_scenario(&results)?;
        println!("  - {} report files written to {:?}", written.len(), writer.dir());

        runs.push((definition.name.clone(), results));
    }
    Ok(runs)
}

/// Writes `comparison.csv` and prints the summary of all runs.
pub fn report_comparison(runs: &[(String, ScenarioResults)], output_dir: &Path) -> Result<()> {
    let lifetimes: Vec<StageImpact> = runs.iter().map(|(_, results)| results.lifetime()).collect();
    let writer = ReportWriter::new(output_dir)?;
    let path = writer
        .write_comparison(&lifetimes)
        .context("Failed to write scenario comparison")?;
    print_summary_report(runs);
    println!("\nComparison written to {:?}", path);
    Ok(())
}

fn print_summary_report(runs: &[(String, ScenarioResults)]) {
    println!("\n\n--- [Final Summary Report] ---");
    println!("========================================");
    println!("Impacts per passenger-km:");

    for (name, results) in runs {
        let summary = results.summary();
        println!(
            "\nScenario: {} (home: {}, rail share: {:.0}%)",
            name,
            summary.home_country,
            summary.rail_allocation * 100.0
        );
        for stage in &summary.stages {
            println!(
                "  - {:<32} {:>12.4e} kg CO2e | {:>12.4e} kg SO2e | {:>12.4e} kg PM2.5e",
                stage.label, stage.co2_eq_kg, stage.so2_eq_kg, stage.pm25_eq_kg
            );
        }
        println!("  --------------------------------------");
        println!(
            "  - {:<32} {:>12.4e} kg CO2e | {:>12.4e} kg SO2e | {:>12.4e} kg PM2.5e",
            summary.lifetime.label,
            summary.lifetime.co2_eq_kg,
            summary.lifetime.so2_eq_kg,
            summary.lifetime.pm25_eq_kg
        );
    }

    println!("========================================");
}
