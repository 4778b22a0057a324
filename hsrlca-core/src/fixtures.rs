//! A small but complete two-country rail model shared by the unit tests.

use crate::dataset::BaseData;
use crate::table::{LabeledTable, ProcessKey, Table, UnitProcessTable};
use hsrlca_schemas::{
    electricity::ElectricitySources,
    params::NormalizationParams,
    phase::Phase,
    records::{ConversionFactor, ProducingCountry, TradeDistance},
};

pub struct FixtureModel {
    pub base: BaseData,
    pub up_countries: Vec<ProducingCountry>,
    pub sources: ElectricitySources,
    pub params: NormalizationParams,
}

pub const UNIT_PROCESSES: [(Phase, &str); 16] = [
    (Phase::ElectricityGeneration, "electricity_China_kWh"),
    (Phase::ElectricityGeneration, "electricity_Thailand_kWh"),
    (Phase::RawMaterialExtraction, "steel_kg"),
    (Phase::RawMaterialTransportation, "lorry_raw_material_transport_kg-km"),
    (Phase::RawMaterialTransportation, "rail_raw_material_transport_kg-km"),
    (Phase::IntermediateComponentProductionI, "rail_km"),
    (Phase::IntermediateComponentProductionII, "sleeper_n"),
    (Phase::IntermediateComponentTransportation, "lorry_intermediate_component_transport_kg-km"),
    (Phase::IntermediateComponentTransportation, "rail_intermediate_component_transport_kg-km"),
    (Phase::FinalComponentProduction, "high_speed_train_car_n"),
    (Phase::FinalComponentProduction, "ballasted_track_km"),
    (Phase::FinalComponentProduction, "non-ballasted_track_km"),
    (Phase::FinalComponentProduction, "requisite_track_systems_km"),
    (Phase::FinalComponentTransportation, "lorry_final_component_transport_kg-km"),
    (Phase::FinalComponentTransportation, "rail_final_component_transport_kg-km"),
    (Phase::PassengerTransportation, "high_speed_rail_operation_p-km"),
];

pub const SPECIES: [&str; 4] = ["CO2", "CH4", "SO2", "PM25"];

/// Builds a requirements-shaped table from sparse `(column, value)` entries. Columns are the
/// unit processes themselves, in row order.
pub fn process_table(
    rows: &[(Phase, &str)],
    entries: &[(&str, &[(&str, f64)])],
) -> UnitProcessTable {
    let columns: Vec<&str> = rows.iter().map(|(_, up)| *up).collect();
    let mut table = Table::new(["phase", "unit_process"], columns.iter().copied()).unwrap();
    for (phase, up) in rows {
        let mut values = vec![0.0; columns.len()];
        if let Some((_, cells)) = entries.iter().find(|(name, _)| name == up) {
            for (column, value) in cells.iter() {
                let position = columns.iter().position(|c| c == column).unwrap();
                values[position] = *value;
            }
        }
        table.push_row(ProcessKey::new(*phase, *up), values).unwrap();
    }
    table
}

pub fn labeled(index: &str, columns: &[&str], rows: &[(&str, &[f64])]) -> LabeledTable {
    let mut table = Table::new([index], columns.iter().copied()).unwrap();
    for (label, values) in rows {
        table.push_row(label.to_string(), values.to_vec()).unwrap();
    }
    table
}

pub fn up_inputs_base() -> UnitProcessTable {
    process_table(
        &UNIT_PROCESSES,
        &[
            ("steel_kg", &[("electricity_Thailand_kWh", 0.5)]),
            ("rail_km", &[("steel_kg", 60000.0), ("electricity_Thailand_kWh", 2000.0)]),
            ("sleeper_n", &[("steel_kg", 5.0), ("electricity_Thailand_kWh", 1.0)]),
            (
                "high_speed_train_car_n",
                &[("steel_kg", 40000.0), ("electricity_Thailand_kWh", 10000.0)],
            ),
            ("ballasted_track_km", &[("rail_km", 2.0), ("sleeper_n", 1600.0)]),
            ("non-ballasted_track_km", &[("rail_km", 2.0), ("sleeper_n", 800.0)]),
            (
                "requisite_track_systems_km",
                &[("steel_kg", 1000.0), ("electricity_Thailand_kWh", 500.0)],
            ),
            ("high_speed_rail_operation_p-km", &[("electricity_Thailand_kWh", 0.05)]),
        ],
    )
}

pub fn up_emissions_base() -> UnitProcessTable {
    let mut table = Table::new(["phase", "unit_process"], SPECIES).unwrap();
    for (phase, up) in UNIT_PROCESSES {
        let values = match up {
            "steel_kg" => vec![2.0, 0.01, 0.005, 0.001],
            "sleeper_n" => vec![10.0, 0.0, 0.0, 0.0],
            up if up.starts_with("lorry_") => vec![0.0002, 0.0, 0.0, 0.000001],
            up if up.starts_with("rail_") && up.ends_with("kg-km") => vec![0.00005, 0.0, 0.0, 0.0],
            _ => vec![0.0; 4],
        };
        table.push_row(ProcessKey::new(phase, up), values).unwrap();
    }
    table
}

pub fn national_energy_supply() -> LabeledTable {
    labeled(
        "country",
        &["coal_gw", "gas_gw", "hydro_gw"],
        &[("China", &[600.0, 100.0, 300.0]), ("Thailand", &[200.0, 600.0, 200.0])],
    )
}

pub fn unit_energy_emissions() -> LabeledTable {
    labeled(
        "fuel",
        &SPECIES,
        &[
            ("coal", &[1.0, 0.001, 0.01, 0.001]),
            ("gas", &[0.5, 0.002, 0.001, 0.0001]),
            ("hydro", &[0.02, 0.0, 0.0, 0.0]),
        ],
    )
}

pub fn conversion_factors() -> Vec<ConversionFactor> {
    [
        ("global_warming_potential", "CO2", 1.0),
        ("global_warming_potential", "CH4", 25.0),
        ("air_acidification_potential", "SO2", 1.0),
        ("particulate_matter_potential", "PM25", 1.0),
    ]
    .iter()
    .map(|(category, emission, conversion)| ConversionFactor {
        category: category.to_string(),
        emission: emission.to_string(),
        conversion: *conversion,
    })
    .collect()
}

pub fn trade_distances() -> Vec<TradeDistance> {
    [("Thailand", "China", 1000.0), ("Thailand", "Thailand", 200.0)]
        .iter()
        .map(|(home, producer, distance)| TradeDistance {
            home_country: home.to_string(),
            producing_country: producer.to_string(),
            avg_export_distance: *distance,
        })
        .collect()
}

pub fn up_countries() -> Vec<ProducingCountry> {
    UNIT_PROCESSES
        .iter()
        .map(|(_, up)| ProducingCountry {
            unit_process: Some(up.to_string()),
            producing_country: match *up {
                "steel_kg" | "high_speed_train_car_n" => "China",
                _ => "Thailand",
            }
            .to_string(),
        })
        .collect()
}

pub fn params() -> NormalizationParams {
    NormalizationParams::new(500.0, 0.8, 10.0, 300.0, 30.0, 20.0, 400000.0, 100.0, 0.25, 365.0)
}

pub fn model() -> FixtureModel {
    FixtureModel {
        base: BaseData {
            up_inputs_base: up_inputs_base(),
            up_emissions_base: up_emissions_base(),
            national_energy_supply: national_energy_supply(),
            unit_energy_emissions: unit_energy_emissions(),
            emissions_eq_conversion: conversion_factors(),
            trade_distances: trade_distances(),
        },
        up_countries: up_countries(),
        sources: ElectricitySources::for_countries(["China", "Thailand"]),
        params: params(),
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-12_f64.max(expected.abs() * 1e-10);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
