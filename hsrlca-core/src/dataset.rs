use crate::{
    error::{HsrLcaError, Result},
    loader,
    table::{LabeledTable, UnitProcessTable},
};
use hsrlca_schemas::{
    file_formats::{DataFiles, ModelFile},
    records::{ConversionFactor, ProducingCountry, TradeDistance},
};
use std::fs;
use std::path::Path;

/// The scenario-independent datasets. Each scenario receives its own clone.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseData {
    pub up_inputs_base: UnitProcessTable,
    pub up_emissions_base: UnitProcessTable,
    pub national_energy_supply: LabeledTable,
    pub unit_energy_emissions: LabeledTable,
    pub emissions_eq_conversion: Vec<ConversionFactor>,
    pub trade_distances: Vec<TradeDistance>,
}

impl BaseData {
    /// Loads all datasets named in `files`, resolving them against `files.data_dir`.
    pub fn load(files: &DataFiles) -> Result<Self> {
        let dir = Path::new(&files.data_dir);
        log::debug!("loading base data from '{}'", dir.display());

        let data = Self {
            up_inputs_base: loader::read_unit_process_table(&dir.join(&files.up_inputs_base))?,
            up_emissions_base: loader::read_unit_process_table(&dir.join(&files.up_emissions_base))?,
            national_energy_supply: loader::read_labeled_table(&dir.join(&files.national_energy_supply))?,
            unit_energy_emissions: loader::read_labeled_table(&dir.join(&files.unit_energy_emissions))?,
            emissions_eq_conversion: loader::read_records(&dir.join(&files.emissions_eq_conversion))?,
            trade_distances: loader::read_records(&dir.join(&files.trade_distances))?,
        };
        log::debug!(
            "loaded {} unit processes, {} countries, {} fuels",
            data.up_inputs_base.len(),
            data.national_energy_supply.len(),
            data.unit_energy_emissions.len()
        );
        Ok(data)
    }
}

/// Loads a scenario's producing-country assignment.
pub fn load_producing_countries(path: &Path) -> Result<Vec<ProducingCountry>> {
    loader::read_records(path)
}

/// Reads and parses a YAML model file.
pub fn load_model_file(path: &Path) -> Result<ModelFile> {
    let source = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| HsrLcaError::FileIO(source.clone(), e))?;
    serde_yaml::from_str(&content).map_err(|e| HsrLcaError::YamlParsing(source, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_file_parses_with_defaults() {
        let yaml = r#"
schema_version: "1.0"
data:
  data_dir: data/demo
  up_inputs_base: up_inputs_base.csv
  up_emissions_base: up_emissions_base.csv
  national_energy_supply: national_energy_supply.csv
  unit_energy_emissions: unit_energy_emissions.csv
  emissions_eq_conversion: emissions_eq_conversion.csv
  trade_distances: trade_distances.csv
normalization:
  avg_train_capacity: 500
  avg_train_capacity_filled: 0.8
  avg_daily_trips_per_train: 10
  avg_train_trip_distance: 300
  avg_train_lifespan: 30
  avg_number_active_trains: 20
  avg_train_mass: 400000
  avg_infrastructure_lifespan: 100
  avg_pct_ballasted_track: 0.25
scenarios:
  - name: THA_china_supply
    home_country: Thailand
    up_countries: up_countries_THA.csv
"#;
        let model: ModelFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(model.rail_allocation, 0.5);
        assert!(!model.strict);
        assert!(model.electricity_sources.is_none());
        assert_eq!(model.normalization.avg_pct_nonballasted_track, 0.75);
        assert_eq!(model.scenarios[0].home_country, "Thailand");
    }

    #[test]
    fn test_missing_model_file_is_io_error() {
        let err = load_model_file(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, HsrLcaError::FileIO(..)));
    }
}
