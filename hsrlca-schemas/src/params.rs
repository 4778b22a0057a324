use serde::{Deserialize, Serialize};

/// Assumptions that tie passenger transportation to one functional unit (1 p*km).
///
/// The non-ballasted share is always derived from the ballasted share so that the two add up
/// to exactly one; it is never read from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NormalizationInputs")]
pub struct NormalizationParams {
    /// `atc`, seats per train.
    pub avg_train_capacity: f64,
    /// `atcf`, share of seats filled.
    pub avg_train_capacity_filled: f64,
    /// `adt`
    pub avg_daily_trips_per_train: f64,
    /// `attd`, km per trip.
    pub avg_train_trip_distance: f64,
    /// `atl`, years.
    pub avg_train_lifespan: f64,
    /// `anat`
    pub avg_number_active_trains: f64,
    /// `atm`, carried for reporting; no requirement formula uses it.
    pub avg_train_mass: f64,
    /// `ail`, years.
    pub avg_infrastructure_lifespan: f64,
    /// `apbt`
    pub avg_pct_ballasted_track: f64,
    /// `apnt`, derived.
    pub avg_pct_nonballasted_track: f64,
    pub days: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct NormalizationInputs {
    avg_train_capacity: f64,
    avg_train_capacity_filled: f64,
    avg_daily_trips_per_train: f64,
    avg_train_trip_distance: f64,
    avg_train_lifespan: f64,
    avg_number_active_trains: f64,
    #[serde(default)]
    avg_train_mass: f64,
    avg_infrastructure_lifespan: f64,
    avg_pct_ballasted_track: f64,
    #[serde(default = "default_days")]
    days: f64,
}

fn default_days() -> f64 {
    365.0
}

impl From<NormalizationInputs> for NormalizationParams {
    fn from(i: NormalizationInputs) -> Self {
        NormalizationParams::new(
            i.avg_train_capacity,
            i.avg_train_capacity_filled,
            i.avg_daily_trips_per_train,
            i.avg_train_trip_distance,
            i.avg_train_lifespan,
            i.avg_number_active_trains,
            i.avg_train_mass,
            i.avg_infrastructure_lifespan,
            i.avg_pct_ballasted_track,
            i.days,
        )
    }
}

impl NormalizationParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        avg_train_capacity: f64,
        avg_train_capacity_filled: f64,
        avg_daily_trips_per_train: f64,
        avg_train_trip_distance: f64,
        avg_train_lifespan: f64,
        avg_number_active_trains: f64,
        avg_train_mass: f64,
        avg_infrastructure_lifespan: f64,
        avg_pct_ballasted_track: f64,
        days: f64,
    ) -> Self {
        Self {
            avg_train_capacity,
            avg_train_capacity_filled,
            avg_daily_trips_per_train,
            avg_train_trip_distance,
            avg_train_lifespan,
            avg_number_active_trains,
            avg_train_mass,
            avg_infrastructure_lifespan,
            avg_pct_ballasted_track,
            avg_pct_nonballasted_track: nonballasted_share(avg_pct_ballasted_track),
            days,
        }
    }

    /// Non-ballasted share implied by the current ballasted share. Reads `avg_pct_ballasted_track`
    /// rather than the stored field, so it stays correct after the ballasted share is edited.
    pub fn derived_nonballasted_share(&self) -> f64 {
        nonballasted_share(self.avg_pct_ballasted_track)
    }

    /// Passenger-kilometers delivered per year across the active fleet:
    /// `atc * atcf * adt * attd * anat * days`.
    pub fn annual_passenger_km(&self) -> f64 {
        self.avg_train_capacity
            * self.avg_train_capacity_filled
            * self.avg_daily_trips_per_train
            * self.avg_train_trip_distance
            * self.avg_number_active_trains
            * self.days
    }
}

// 15 decimal places absorbs the drift of 1 - x without restricting real inputs
fn nonballasted_share(ballasted: f64) -> f64 {
    round_to(1.0 - ballasted, 15)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
