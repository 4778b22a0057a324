use crate::error::{HsrLcaError, Result};
use crate::table::UnitProcessTable;
use hsrlca_schemas::{
    columns::{
        BALLASTED_TRACK, FUNCTIONAL_UNIT_PROCESS, HIGH_SPEED_TRAIN_CAR, NONBALLASTED_TRACK,
        REQUISITE_TRACK_SYSTEMS,
    },
    params::NormalizationParams,
    phase::Phase,
};
use serde::Serialize;

/// Quantities of rolling stock and track consumed by one passenger-kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PassengerRequirements {
    pub train_car: f64,
    pub ballasted_track: f64,
    pub nonballasted_track: f64,
    pub requisite_track_systems: f64,
}

impl PassengerRequirements {
    pub fn from_params(p: &NormalizationParams) -> Result<Self> {
        let divisors = [
            ("avg_train_capacity", p.avg_train_capacity),
            ("avg_train_capacity_filled", p.avg_train_capacity_filled),
            ("avg_daily_trips_per_train", p.avg_daily_trips_per_train),
            ("avg_train_trip_distance", p.avg_train_trip_distance),
            ("avg_number_active_trains", p.avg_number_active_trains),
            ("days", p.days),
            ("avg_train_lifespan", p.avg_train_lifespan),
            ("avg_infrastructure_lifespan", p.avg_infrastructure_lifespan),
        ];
        for (name, value) in divisors {
            if !value.is_finite() || value <= 0.0 {
                return Err(HsrLcaError::invalid_parameter(name, value, "must be positive"));
            }
        }
        if !(0.0..=1.0).contains(&p.avg_pct_ballasted_track) {
            return Err(HsrLcaError::invalid_parameter(
                "avg_pct_ballasted_track",
                p.avg_pct_ballasted_track,
                "must lie within [0, 1]",
            ));
        }

        let passenger_km_per_year = p.annual_passenger_km();
        let per_train_lifetime = passenger_km_per_year * p.avg_train_lifespan;
        let per_infrastructure_lifetime = passenger_km_per_year * p.avg_infrastructure_lifespan;

        Ok(Self {
            train_car: 1.0 / per_train_lifetime,
            ballasted_track: p.avg_pct_ballasted_track / per_infrastructure_lifetime,
            nonballasted_track: p.derived_nonballasted_share() / per_infrastructure_lifetime,
            requisite_track_systems: 1.0 / per_infrastructure_lifetime,
        })
    }
}

/// Sets the passenger operation row so that the model delivers exactly one functional unit.
/// All other rows still describe one unit of their own output.
pub fn passenger_update(
    up_inputs: &UnitProcessTable,
    params: &NormalizationParams,
) -> Result<UnitProcessTable> {
    let requirements = PassengerRequirements::from_params(params)?;

    let mut complete = up_inputs.clone();
    let row = complete
        .phase_positions(Phase::PassengerTransportation)
        .into_iter()
        .find(|&r| complete.keys()[r].unit_process == FUNCTIONAL_UNIT_PROCESS)
        .ok_or_else(|| {
            HsrLcaError::DataIntegrity(format!(
                "passenger transportation row '{}' is missing",
                FUNCTIONAL_UNIT_PROCESS
            ))
        })?;

    for (column, value) in [
        (HIGH_SPEED_TRAIN_CAR, requirements.train_car),
        (BALLASTED_TRACK, requirements.ballasted_track),
        (NONBALLASTED_TRACK, requirements.nonballasted_track),
        (REQUISITE_TRACK_SYSTEMS, requirements.requisite_track_systems),
    ] {
        let col = complete.require_column(column)?;
        complete.set_value(row, col, value);
    }
    Ok(complete)
}
