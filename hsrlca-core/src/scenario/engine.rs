use super::state::ScenarioResults;
use crate::calc::{self, ConversionTable, RailAllocation};
use crate::dataset::BaseData;
use crate::error::Result;
use hsrlca_schemas::{
    electricity::ElectricitySources, params::NormalizationParams, records::ProducingCountry,
};

/// A fully configured scenario. Built by [`super::builder::ScenarioBuilder`].
#[derive(Debug, Clone)]
pub struct Scenario {
    pub(super) home_country: String,
    pub(super) base: BaseData,
    pub(super) up_countries: Vec<ProducingCountry>,
    pub(super) rail_allocation: RailAllocation,
    pub(super) normalization: NormalizationParams,
    pub(super) sources: ElectricitySources,
    pub(super) verbose: bool,
    pub(super) strict: bool,
}

impl Scenario {
    pub fn home_country(&self) -> &str {
        &self.home_country
    }

    pub fn rail_allocation(&self) -> RailAllocation {
        self.rail_allocation
    }

    /// Runs every stage from the trade schedule through lifetime impacts. The scenario itself
    /// is not modified, so repeated runs give identical results.
    pub fn run(&self) -> Result<ScenarioResults> {
        let home = self.home_country.as_str();
        let base = &self.base;
        self.stage(format_args!("running scenario for {}", home));

        let trade_schedule =
            calc::trade_schedule(home, &self.up_countries, &base.up_inputs_base, &self.sources)?;
        self.stage(format_args!("trade schedule: {} unit processes", trade_schedule.len()));

        let transport_schedule =
            calc::transport_schedule(&trade_schedule, &base.trade_distances, &self.sources)?;
        let up_inputs_transport_update = calc::transport_update(
            &transport_schedule,
            &base.up_inputs_base,
            self.rail_allocation,
        )?;
        self.stage(format_args!(
            "transport updated with {:.0}% rail",
            self.rail_allocation.fraction() * 100.0
        ));

        let national_energy_mixes = calc::energy_mixes(&base.national_energy_supply, self.strict)?;
        let energy_mix_emissions =
            calc::energy_mix_emissions(&national_energy_mixes, &base.unit_energy_emissions)?;
        let up_emissions_complete =
            calc::emissions_update(&base.up_emissions_base, &energy_mix_emissions, &self.sources)?;
        self.stage(format_args!(
            "energy mixes computed for {} countries",
            national_energy_mixes.len()
        ));

        let up_inputs_elec_update = calc::electricity_source_update(
            &up_inputs_transport_update,
            &trade_schedule,
            home,
            &self.sources,
        )?;
        self.stage(format_args!("electricity reallocated to producing countries"));

        let passenger_requirements = calc::PassengerRequirements::from_params(&self.normalization)?;
        let up_inputs_complete = calc::passenger_update(&up_inputs_elec_update, &self.normalization)?;
        self.stage(format_args!(
            "normalized to one passenger-km (train car {:.3e})",
            passenger_requirements.train_car
        ));

        let total_requirements = calc::total_requirements(&up_inputs_complete)?;
        self.stage(format_args!("requirements propagated"));

        let emissions_schedule =
            calc::emissions_schedule(&up_inputs_complete, &up_emissions_complete)?;
        let emissions_total = calc::emissions_total(&total_requirements, &emissions_schedule)?;
        let phase_summary = calc::sum_phases(&emissions_total)?;
        let phase_summary_condensed = calc::condense_phase_sums(&phase_summary, home)?;
        self.stage(format_args!("emissions summarized by phase"));

        let conversion = ConversionTable::from_records(&base.emissions_eq_conversion, self.strict)?;
        let total_impacts_phase =
            calc::phase_impacts(&phase_summary_condensed, &conversion, self.strict)?;
        let total_impacts_lifetime = calc::lifetime_impacts(&total_impacts_phase, home)?;

        let results = ScenarioResults {
            home_country: self.home_country.clone(),
            rail_allocation: self.rail_allocation,
            trade_schedule,
            transport_schedule,
            up_inputs_transport_update,
            national_energy_mixes,
            energy_mix_emissions,
            up_emissions_complete,
            up_inputs_elec_update,
            passenger_requirements,
            up_inputs_complete,
            total_requirements,
            emissions_schedule,
            emissions_total,
            phase_summary,
            phase_summary_condensed,
            total_impacts_phase,
            total_impacts_lifetime,
        };
        let lifetime = results.lifetime();
        self.stage(format_args!(
            "lifetime impacts for {}: {:.4e} kg CO2-eq, {:.4e} kg SO2-eq, {:.4e} kg PM2.5-eq",
            home, lifetime.co2_eq_kg, lifetime.so2_eq_kg, lifetime.pm25_eq_kg
        ));
        Ok(results)
    }

    fn stage(&self, message: std::fmt::Arguments<'_>) {
        if self.verbose {
            log::info!("{}", message);
        } else {
            log::debug!("{}", message);
        }
    }
}
