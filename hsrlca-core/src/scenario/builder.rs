use super::engine::Scenario;
use crate::{
    calc::{requirements, RailAllocation},
    dataset::BaseData,
    error::{HsrLcaError, Result},
};
use hsrlca_schemas::{
    electricity::ElectricitySources, params::NormalizationParams, records::ProducingCountry,
};

/// A fluent builder for constructing a [`Scenario`].
///
/// Home country, base data, producing countries and normalization parameters are required.
/// Rail allocation defaults to an even split and electricity sources to the six-country set.
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    home_country: Option<String>,
    base: Option<BaseData>,
    up_countries: Option<Vec<ProducingCountry>>,
    rail_allocation: Option<f64>,
    normalization: Option<NormalizationParams>,
    sources: Option<ElectricitySources>,
    verbose: bool,
    strict: bool,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home_country(mut self, home_country: impl Into<String>) -> Self {
        self.home_country = Some(home_country.into());
        self
    }

    /// Sets the scenario-independent datasets. The scenario keeps its own copy.
    pub fn with_base_data(mut self, base: BaseData) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_producing_countries(mut self, up_countries: Vec<ProducingCountry>) -> Self {
        self.up_countries = Some(up_countries);
        self
    }

    /// Share of every shipment carried by rail, in `[0, 1]`.
    pub fn with_rail_allocation(mut self, fraction: f64) -> Self {
        self.rail_allocation = Some(fraction);
        self
    }

    pub fn with_normalization(mut self, params: NormalizationParams) -> Self {
        self.normalization = Some(params);
        self
    }

    pub fn with_electricity_sources(mut self, sources: ElectricitySources) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Reports each stage at `info` level instead of `debug`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Turns the energy-mix and impact-category checks into hard errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Consumes the builder and returns a runnable [`Scenario`].
    ///
    /// # Errors
    ///
    /// `ConfigError` if a required piece is missing, the electricity source table is empty or
    /// the propagation order is inconsistent; `InvalidParameter` for a rail allocation outside
    /// `[0, 1]`; `UnknownCountry` if the home country has no electricity source.
    pub fn build(self) -> Result<Scenario> {
        let home_country = self
            .home_country
            .ok_or_else(|| HsrLcaError::ConfigError("home country not provided".to_string()))?;
        let base = self
            .base
            .ok_or_else(|| HsrLcaError::ConfigError("base data not provided".to_string()))?;
        let up_countries = self.up_countries.ok_or_else(|| {
            HsrLcaError::ConfigError("producing-country assignment not provided".to_string())
        })?;
        let normalization = self.normalization.ok_or_else(|| {
            HsrLcaError::ConfigError("normalization parameters not provided".to_string())
        })?;

        let rail_allocation = match self.rail_allocation {
            Some(fraction) => RailAllocation::new(fraction)?,
            None => RailAllocation::default(),
        };

        let sources = self.sources.unwrap_or_default();
        if sources.is_empty() {
            return Err(HsrLcaError::ConfigError(
                "no electricity sources configured".to_string(),
            ));
        }
        if !sources.contains_country(&home_country) {
            return Err(HsrLcaError::UnknownCountry(home_country));
        }

        requirements::validate_topology()?;

        Ok(Scenario {
            home_country,
            base,
            up_countries,
            rail_allocation,
            normalization,
            sources,
            verbose: self.verbose,
            strict: self.strict,
        })
    }
}
