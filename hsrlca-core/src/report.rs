use crate::error::{HsrLcaError, Result};
use crate::scenario::{ImpactSummary, ScenarioResults, StageImpact};
use crate::table::{RowKey, Table};
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the tables of scenario runs as CSV files under one directory.
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| HsrLcaError::FileIO(dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes every intermediate table of `results` plus a JSON summary. Returns the paths
    /// written.
    pub fn write_scenario(&self, results: &ScenarioResults) -> Result<Vec<PathBuf>> {
        let mut written = vec![
            self.write_records("trade_schedule.csv", results.trade_schedule.entries())?,
            self.write_records("transport_schedule.csv", results.transport_schedule.entries())?,
            self.write_table("up_inputs_transport_update.csv", &results.up_inputs_transport_update)?,
            self.write_table("national_energy_mixes.csv", &results.national_energy_mixes)?,
            self.write_table("energy_mix_emissions.csv", &results.energy_mix_emissions)?,
            self.write_table("up_emissions_complete.csv", &results.up_emissions_complete)?,
            self.write_table("up_inputs_elec_update.csv", &results.up_inputs_elec_update)?,
            self.write_table("up_inputs_complete.csv", &results.up_inputs_complete)?,
            self.write_table("total_requirements.csv", &results.total_requirements)?,
            self.write_table("emissions_schedule.csv", &results.emissions_schedule)?,
            self.write_table("emissions_total.csv", &results.emissions_total)?,
            self.write_table("phase_summary.csv", &results.phase_summary)?,
            self.write_table("phase_summary_condensed.csv", &results.phase_summary_condensed)?,
            self.write_table("total_impacts_phase.csv", &results.total_impacts_phase)?,
            self.write_table("total_impacts_lifetime.csv", &results.total_impacts_lifetime)?,
        ];
        written.push(self.write_summary(&results.summary())?);
        log::debug!("wrote {} report files to '{}'", written.len(), self.dir.display());
        Ok(written)
    }

    pub fn write_summary(&self, summary: &ImpactSummary) -> Result<PathBuf> {
        let path = self.dir.join("summary.json");
        let json = serde_json::to_string_pretty(summary)?;
        fs::write(&path, json).map_err(|e| HsrLcaError::FileIO(path.display().to_string(), e))?;
        Ok(path)
    }

    /// One lifetime row per scenario, for side-by-side comparison.
    pub fn write_comparison(&self, lifetimes: &[StageImpact]) -> Result<PathBuf> {
        self.write_records("comparison.csv", lifetimes)
    }

    pub fn write_table<K: RowKey>(&self, name: &str, table: &Table<K>) -> Result<PathBuf> {
        let path = self.dir.join(name);
        let source = path.display().to_string();
        let mut writer = Writer::from_path(&path).map_err(|e| HsrLcaError::CsvError(source.clone(), e))?;

        let header = table.index_names().iter().chain(table.columns());
        writer
            .write_record(header)
            .map_err(|e| HsrLcaError::CsvError(source.clone(), e))?;
        for (key, values) in table.rows() {
            let record = key
                .index_values()
                .into_iter()
                .chain(values.iter().map(|v| v.to_string()));
            writer
                .write_record(record)
                .map_err(|e| HsrLcaError::CsvError(source.clone(), e))?;
        }
        writer
            .flush()
            .map_err(|e| HsrLcaError::FileIO(source.clone(), e))?;
        Ok(path)
    }

    pub fn write_records<T: Serialize>(&self, name: &str, records: &[T]) -> Result<PathBuf> {
        let path = self.dir.join(name);
        let source = path.display().to_string();
        let mut writer = Writer::from_path(&path).map_err(|e| HsrLcaError::CsvError(source.clone(), e))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| HsrLcaError::CsvError(source.clone(), e))?;
        }
        writer.flush().map_err(|e| HsrLcaError::FileIO(source, e))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::loader;
    use crate::scenario::ScenarioBuilder;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hsrlca-report-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_table_round_trips_through_csv() {
        let dir = scratch_dir("table");
        let writer = ReportWriter::new(&dir).unwrap();
        let table = fixtures::up_inputs_base();
        let path = writer.write_table("inputs.csv", &table).unwrap();

        let read_back = loader::read_unit_process_table(&path).unwrap();
        assert_eq!(read_back, table);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_scenario_reports_are_written() {
        let model = fixtures::model();
        let results = ScenarioBuilder::new()
            .with_home_country("Thailand")
            .with_base_data(model.base)
            .with_producing_countries(model.up_countries)
            .with_normalization(model.params)
            .with_electricity_sources(model.sources)
            .build()
            .unwrap()
            .run()
            .unwrap();

        let dir = scratch_dir("scenario");
        let writer = ReportWriter::new(&dir).unwrap();
        let written = writer.write_scenario(&results).unwrap();
        assert_eq!(written.len(), 16);
        assert!(written.iter().all(|p| p.exists()));

        let lifetime = fs::read_to_string(dir.join("total_impacts_lifetime.csv")).unwrap();
        assert!(lifetime.starts_with("scenario,CO2_eq_kg,SO2_eq_kg,PM25_eq_kg"));
        assert!(lifetime.contains("total_impacts_Thailand"));

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["home_country"], "Thailand");
        assert_eq!(summary["stages"].as_array().unwrap().len(), 3);

        let trade = fs::read_to_string(dir.join("trade_schedule.csv")).unwrap();
        assert!(trade.starts_with("unit_process,home_country,up_countries"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
