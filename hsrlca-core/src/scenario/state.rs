use crate::calc::{PassengerRequirements, RailAllocation, TradeSchedule, TransportSchedule};
use crate::table::{LabeledTable, PhaseTable, UnitProcessTable};
use serde::Serialize;

/// Every intermediate table of one scenario run, in the order the stages produce them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResults {
    pub home_country: String,
    pub rail_allocation: RailAllocation,
    pub trade_schedule: TradeSchedule,
    pub transport_schedule: TransportSchedule,
    pub up_inputs_transport_update: UnitProcessTable,
    pub national_energy_mixes: LabeledTable,
    pub energy_mix_emissions: LabeledTable,
    pub up_emissions_complete: UnitProcessTable,
    pub up_inputs_elec_update: UnitProcessTable,
    pub passenger_requirements: PassengerRequirements,
    pub up_inputs_complete: UnitProcessTable,
    pub total_requirements: UnitProcessTable,
    pub emissions_schedule: UnitProcessTable,
    pub emissions_total: UnitProcessTable,
    pub phase_summary: PhaseTable,
    pub phase_summary_condensed: LabeledTable,
    pub total_impacts_phase: LabeledTable,
    pub total_impacts_lifetime: LabeledTable,
}

/// The figures a report or comparison needs from a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSummary {
    pub home_country: String,
    pub rail_allocation: f64,
    pub stages: Vec<StageImpact>,
    pub lifetime: StageImpact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageImpact {
    pub label: String,
    #[serde(rename = "CO2_eq_kg")]
    pub co2_eq_kg: f64,
    #[serde(rename = "SO2_eq_kg")]
    pub so2_eq_kg: f64,
    #[serde(rename = "PM25_eq_kg")]
    pub pm25_eq_kg: f64,
}

impl StageImpact {
    fn from_row(label: &str, values: &[f64]) -> Self {
        let at = |i: usize| values.get(i).copied().unwrap_or(0.0);
        Self {
            label: label.to_string(),
            co2_eq_kg: at(0),
            so2_eq_kg: at(1),
            pm25_eq_kg: at(2),
        }
    }
}

impl ScenarioResults {
    /// Lifetime impacts per passenger-km, in CO2, SO2 and PM2.5 equivalents.
    pub fn lifetime(&self) -> StageImpact {
        self.total_impacts_lifetime
            .rows()
            .next()
            .map(|(label, values)| StageImpact::from_row(label, values))
            .unwrap_or_else(|| StageImpact::from_row("", &[]))
    }

    pub fn summary(&self) -> ImpactSummary {
        ImpactSummary {
            home_country: self.home_country.clone(),
            rail_allocation: self.rail_allocation.fraction(),
            stages: self
                .total_impacts_phase
                .rows()
                .map(|(label, values)| StageImpact::from_row(label, values))
                .collect(),
            lifetime: self.lifetime(),
        }
    }
}
