//! The calculation stages, in pipeline order. Every stage is a pure function of its inputs.

pub mod trade;
pub mod transport;
pub mod energy_mix;
pub mod electricity;
pub mod functional_unit;
pub mod requirements;
pub mod emissions;
pub mod impacts;

pub use electricity::electricity_source_update;
pub use emissions::{condense_phase_sums, emissions_schedule, emissions_total, sum_phases};
pub use energy_mix::{emissions_update, energy_mix_emissions, energy_mixes};
pub use functional_unit::{passenger_update, PassengerRequirements};
pub use impacts::{lifetime_impacts, phase_impacts, ConversionTable};
pub use requirements::{total_requirements, validate_topology};
pub use trade::{trade_schedule, TradeSchedule};
pub use transport::{transport_schedule, transport_update, RailAllocation, TransportSchedule};
