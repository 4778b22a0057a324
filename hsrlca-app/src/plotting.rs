//! Bar charts of stage and lifetime impacts.

use anyhow::Result;
use hsrlca_core::scenario::{ScenarioResults, StageImpact};
use plotters::prelude::*;
use std::path::Path;

const CATEGORIES: [(&str, &str); 3] = [
    ("CO2_eq_kg", "kg CO2-eq / p-km"),
    ("SO2_eq_kg", "kg SO2-eq / p-km"),
    ("PM25_eq_kg", "kg PM2.5-eq / p-km"),
];

fn category_value(impact: &StageImpact, category: usize) -> f64 {
    match category {
        0 => impact.co2_eq_kg,
        1 => impact.so2_eq_kg,
        _ => impact.pm25_eq_kg,
    }
}

/// Generates the per-scenario stage charts and the cross-scenario comparison chart.
pub fn generate_all_plots(output_dir: &Path, runs: &[(String, ScenarioResults)]) -> Result<()> {
    println!("[Plotting] Generating impact charts...");

    if runs.is_empty() {
        println!("[Plotting] Warning: No scenarios to plot.");
        return Ok(());
    }

    for (name, results) in runs {
        let stages = results.summary().stages;
        let path = output_dir.join(name).join("stage_impacts.png");
        plot_impact_bars(&path, &format!("Stage impacts: {}", name), &stages)?;
    }

    let lifetimes: Vec<StageImpact> = runs
        .iter()
        .map(|(name, results)| StageImpact {
            label: name.clone(),
            ..results.lifetime()
        })
        .collect();
    plot_impact_bars(
        &output_dir.join("lifetime_comparison.png"),
        "Lifetime impacts per passenger-km",
        &lifetimes,
    )?;

    println!("[Plotting] Charts have been saved to {:?}.", output_dir);
    Ok(())
}

/// One panel per impact category, one bar per labeled row.
fn plot_impact_bars(path: &Path, title: &str, rows: &[StageImpact]) -> Result<()> {
    let root = BitMapBackend::new(path, (1536, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 36).into_font())?;
    let panels = root.split_evenly((1, CATEGORIES.len()));
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();

    for (category, (panel, (column, unit))) in panels.iter().zip(CATEGORIES.iter()).enumerate() {
        let values: Vec<f64> = rows.iter().map(|r| category_value(r, category)).collect();
        let max = values.iter().cloned().fold(0.0_f64, f64::max);
        let top = if max > 0.0 { max * 1.1 } else { 1.0 };

        let mut chart = ChartBuilder::on(panel)
            .caption(*column, ("sans-serif", 24).into_font())
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d((0..rows.len()).into_segmented(), 0f64..top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc(*unit)
            .y_label_formatter(&|y| format!("{:.2e}", y))
            .x_labels(rows.len())
            .x_label_formatter(&|x| match x {
                SegmentValue::CenterOf(i) => labels.get(*i).map(|l| l.to_string()).unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(Palette99::pick(category).filled())
                .margin(12)
                .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
        )?;
    }

    root.present()?;
    Ok(())
}
