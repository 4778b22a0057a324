//! Fixed unit-process and column names shared by the input tables.
//!
//! Resource columns of the requirements table carry the same names as the unit processes that
//! produce them, so every name here is both a row label and a column header.

use crate::phase::Phase;

pub const FUNCTIONAL_UNIT_PROCESS: &str = "high_speed_rail_operation_p-km";

pub const HIGH_SPEED_TRAIN_CAR: &str = "high_speed_train_car_n";
pub const BALLASTED_TRACK: &str = "ballasted_track_km";
pub const NONBALLASTED_TRACK: &str = "non-ballasted_track_km";
pub const REQUISITE_TRACK_SYSTEMS: &str = "requisite_track_systems_km";

pub const LORRY_RAW_MATERIAL_TRANSPORT: &str = "lorry_raw_material_transport_kg-km";
pub const RAIL_RAW_MATERIAL_TRANSPORT: &str = "rail_raw_material_transport_kg-km";
pub const LORRY_INTERMEDIATE_COMPONENT_TRANSPORT: &str = "lorry_intermediate_component_transport_kg-km";
pub const RAIL_INTERMEDIATE_COMPONENT_TRANSPORT: &str = "rail_intermediate_component_transport_kg-km";
pub const LORRY_FINAL_COMPONENT_TRANSPORT: &str = "lorry_final_component_transport_kg-km";
pub const RAIL_FINAL_COMPONENT_TRANSPORT: &str = "rail_final_component_transport_kg-km";

pub const TRANSPORT_MODE_PROCESSES: [&str; 6] = [
    LORRY_RAW_MATERIAL_TRANSPORT,
    RAIL_RAW_MATERIAL_TRANSPORT,
    LORRY_INTERMEDIATE_COMPONENT_TRANSPORT,
    RAIL_INTERMEDIATE_COMPONENT_TRANSPORT,
    LORRY_FINAL_COMPONENT_TRANSPORT,
    RAIL_FINAL_COMPONENT_TRANSPORT,
];

/// Unit suffix carried by the fuel columns of the national energy supply table.
pub const ENERGY_SUPPLY_UNIT_SUFFIX: &str = "_gw";

/// A lorry/rail pair of transport columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportColumns {
    pub lorry: &'static str,
    pub rail: &'static str,
}

/// The transport columns that carry a phase's outbound shipments, if it ships anything.
pub fn transport_columns(phase: Phase) -> Option<TransportColumns> {
    match phase {
        Phase::RawMaterialExtraction => Some(TransportColumns {
            lorry: LORRY_RAW_MATERIAL_TRANSPORT,
            rail: RAIL_RAW_MATERIAL_TRANSPORT,
        }),
        Phase::IntermediateComponentProductionI | Phase::IntermediateComponentProductionII => {
            Some(TransportColumns {
                lorry: LORRY_INTERMEDIATE_COMPONENT_TRANSPORT,
                rail: RAIL_INTERMEDIATE_COMPONENT_TRANSPORT,
            })
        }
        Phase::FinalComponentProduction => Some(TransportColumns {
            lorry: LORRY_FINAL_COMPONENT_TRANSPORT,
            rail: RAIL_FINAL_COMPONENT_TRANSPORT,
        }),
        _ => None,
    }
}
