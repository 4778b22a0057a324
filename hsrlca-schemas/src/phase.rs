use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine life-cycle phases of the rail model, in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "electricity_generation")]
    ElectricityGeneration,
    #[serde(rename = "raw_material_extraction")]
    RawMaterialExtraction,
    #[serde(rename = "raw_material_transportation")]
    RawMaterialTransportation,
    #[serde(rename = "intermediate_component_production_i")]
    IntermediateComponentProductionI,
    #[serde(rename = "intermediate_component_production_ii")]
    IntermediateComponentProductionII,
    #[serde(rename = "intermediate_component_transportation")]
    IntermediateComponentTransportation,
    #[serde(rename = "final_component_production")]
    FinalComponentProduction,
    #[serde(rename = "final_component_transportation")]
    FinalComponentTransportation,
    #[serde(rename = "passenger_transportation")]
    PassengerTransportation,
}

impl Phase {
    pub const ALL: [Phase; 9] = [
        Phase::ElectricityGeneration,
        Phase::RawMaterialExtraction,
        Phase::RawMaterialTransportation,
        Phase::IntermediateComponentProductionI,
        Phase::IntermediateComponentProductionII,
        Phase::IntermediateComponentTransportation,
        Phase::FinalComponentProduction,
        Phase::FinalComponentTransportation,
        Phase::PassengerTransportation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::ElectricityGeneration => "electricity_generation",
            Phase::RawMaterialExtraction => "raw_material_extraction",
            Phase::RawMaterialTransportation => "raw_material_transportation",
            Phase::IntermediateComponentProductionI => "intermediate_component_production_i",
            Phase::IntermediateComponentProductionII => "intermediate_component_production_ii",
            Phase::IntermediateComponentTransportation => "intermediate_component_transportation",
            Phase::FinalComponentProduction => "final_component_production",
            Phase::FinalComponentTransportation => "final_component_transportation",
            Phase::PassengerTransportation => "passenger_transportation",
        }
    }

    /// The condensed life-cycle stage this phase reports under. Electricity generation is
    /// attributed through the phases that draw on it and has no stage of its own.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Phase::ElectricityGeneration => None,
            Phase::RawMaterialExtraction | Phase::RawMaterialTransportation => {
                Some(Stage::MaterialsExtraction)
            }
            Phase::IntermediateComponentProductionI
            | Phase::IntermediateComponentProductionII
            | Phase::IntermediateComponentTransportation
            | Phase::FinalComponentProduction
            | Phase::FinalComponentTransportation => Some(Stage::Construction),
            Phase::PassengerTransportation => Some(Stage::Operation),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePhaseError(pub String);

impl fmt::Display for ParsePhaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a recognized phase", self.0)
    }
}

impl std::error::Error for ParsePhaseError {}

impl FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .iter()
            .find(|p| p.as_str() == s.trim())
            .copied()
            .ok_or_else(|| ParsePhaseError(s.to_string()))
    }
}

/// The three condensed stages used for summary reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    MaterialsExtraction,
    Construction,
    Operation,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::MaterialsExtraction, Stage::Construction, Stage::Operation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::MaterialsExtraction => "materials_extraction",
            Stage::Construction => "construction",
            Stage::Operation => "operation",
        }
    }

    pub fn phases(&self) -> Vec<Phase> {
        Phase::ALL
            .iter()
            .copied()
            .filter(|p| p.stage() == Some(*self))
            .collect()
    }

    /// Row label used in condensed summaries, e.g. `construction_Thailand`.
    pub fn label(&self, home_country: &str) -> String {
        format!("{}_{}", self.as_str(), home_country)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Impact categories recognized by the emissions-equivalency conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactCategory {
    GlobalWarmingPotential,
    AirAcidificationPotential,
    ParticulateMatterPotential,
}

impl ImpactCategory {
    pub const ALL: [ImpactCategory; 3] = [
        ImpactCategory::GlobalWarmingPotential,
        ImpactCategory::AirAcidificationPotential,
        ImpactCategory::ParticulateMatterPotential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactCategory::GlobalWarmingPotential => "global_warming_potential",
            ImpactCategory::AirAcidificationPotential => "air_acidification_potential",
            ImpactCategory::ParticulateMatterPotential => "particulate_matter_potential",
        }
    }

    /// Name of the equivalent-emissions output column. PM 2.5 is spelled `PM25`.
    pub fn output_column(&self) -> &'static str {
        match self {
            ImpactCategory::GlobalWarmingPotential => "CO2_eq_kg",
            ImpactCategory::AirAcidificationPotential => "SO2_eq_kg",
            ImpactCategory::ParticulateMatterPotential => "PM25_eq_kg",
        }
    }

    pub fn parse(s: &str) -> Option<ImpactCategory> {
        ImpactCategory::ALL.iter().find(|c| c.as_str() == s.trim()).copied()
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
