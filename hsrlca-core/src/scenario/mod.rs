//! One home-country run of the model: configuration, execution and the retained results.

pub mod builder;
pub mod engine;
pub mod state;

pub use builder::ScenarioBuilder;
pub use engine::Scenario;
pub use state::{ImpactSummary, ScenarioResults, StageImpact};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::functional_unit::PassengerRequirements;
    use crate::error::HsrLcaError;
    use crate::fixtures::{self, assert_close};

    fn fixture_builder() -> ScenarioBuilder {
        let model = fixtures::model();
        ScenarioBuilder::new()
            .with_home_country("Thailand")
            .with_base_data(model.base)
            .with_producing_countries(model.up_countries)
            .with_normalization(model.params)
            .with_electricity_sources(model.sources)
            .strict(true)
    }

    #[test]
    fn test_missing_pieces_are_config_errors() {
        let err = ScenarioBuilder::new().with_home_country("Thailand").build();
        assert!(matches!(err, Err(HsrLcaError::ConfigError(_))));

        let model = fixtures::model();
        let err = ScenarioBuilder::new()
            .with_home_country("Thailand")
            .with_base_data(model.base)
            .with_producing_countries(model.up_countries)
            .build();
        assert!(matches!(err, Err(HsrLcaError::ConfigError(msg)) if msg.contains("normalization")));
    }

    #[test]
    fn test_build_validates_rail_allocation_and_home() {
        assert!(matches!(
            fixture_builder().with_rail_allocation(1.5).build(),
            Err(HsrLcaError::InvalidParameter { .. })
        ));
        assert!(matches!(
            fixture_builder().with_home_country("Vietnam").build(),
            Err(HsrLcaError::UnknownCountry(c)) if c == "Vietnam"
        ));
        let scenario = fixture_builder().build().unwrap();
        assert_eq!(scenario.rail_allocation().fraction(), 0.5);
    }

    #[test]
    fn test_full_pipeline_on_fixture() {
        let results = fixture_builder().with_rail_allocation(0.25).build().unwrap().run().unwrap();
        let req = PassengerRequirements::from_params(&fixtures::params()).unwrap();

        // one p-km needs this many train cars, each 40000 kg steel from China
        let train_cars = results
            .total_requirements
            .get("high_speed_train_car_n", "steel_kg")
            .unwrap();
        assert_close(train_cars, 40000.0 * req.train_car);

        // electricity for steel has moved to the Chinese grid
        assert_eq!(
            results.up_inputs_complete.get("steel_kg", "electricity_China_kWh"),
            Some(0.5)
        );
        assert_eq!(results.phase_summary.len(), 9);
        assert_eq!(results.total_impacts_phase.len(), 3);

        let lifetime = results.lifetime();
        assert_eq!(lifetime.label, "total_impacts_Thailand");
        assert!(lifetime.co2_eq_kg > 0.0);
        let stage_sum: f64 = results.summary().stages.iter().map(|s| s.co2_eq_kg).sum();
        assert_close(lifetime.co2_eq_kg, stage_sum);
    }

    #[test]
    fn test_rerun_is_identical() {
        let scenario = fixture_builder().build().unwrap();
        let first = scenario.run().unwrap();
        let second = scenario.run().unwrap();
        assert_eq!(first, second);
    }
}
