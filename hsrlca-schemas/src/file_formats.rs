use crate::{electricity::ElectricitySources, params::NormalizationParams};
use serde::{Deserialize, Serialize};

/// File names of the scenario-independent datasets, relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFiles {
    pub data_dir: String,
    pub up_inputs_base: String,
    pub up_emissions_base: String,
    pub national_energy_supply: String,
    pub unit_energy_emissions: String,
    pub emissions_eq_conversion: String,
    pub trade_distances: String,
}

/// A single trade scenario: the home country and the file assigning producing countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    pub name: String,
    pub home_country: String,
    pub up_countries: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rail_allocation: Option<f64>,
}

/// Top-level YAML model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    pub schema_version: String,
    pub data: DataFiles,
    #[serde(default = "default_rail_allocation")]
    pub rail_allocation: f64,
    pub normalization: NormalizationParams,
    #[serde(default)]
    pub electricity_sources: Option<ElectricitySources>,
    #[serde(default)]
    pub strict: bool,
    pub scenarios: Vec<ScenarioDefinition>,
}

pub fn default_rail_allocation() -> f64 {
    0.5
}
