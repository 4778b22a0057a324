use super::trade::TradeSchedule;
use crate::error::{HsrLcaError, Result};
use crate::table::UnitProcessTable;
use hsrlca_schemas::{
    columns::{self, FUNCTIONAL_UNIT_PROCESS, TRANSPORT_MODE_PROCESSES},
    electricity::ElectricitySources,
    records::TradeDistance,
};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportEntry {
    pub unit_process: String,
    pub home_country: String,
    #[serde(rename = "up_countries")]
    pub producing_country: String,
    pub avg_export_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransportSchedule {
    entries: Vec<TransportEntry>,
}

impl TransportSchedule {
    pub fn entries(&self) -> &[TransportEntry] {
        &self.entries
    }

    pub fn distance(&self, unit_process: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.unit_process == unit_process)
            .map(|e| e.avg_export_distance)
    }
}

/// Share of every shipment carried by rail; the remainder goes by lorry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RailAllocation(f64);

impl RailAllocation {
    pub fn new(fraction: f64) -> Result<Self> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(HsrLcaError::invalid_parameter(
                "rail_allocation",
                fraction,
                "must lie within [0, 1]",
            ));
        }
        Ok(Self(fraction))
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// Splits `distance` into its (lorry, rail) legs.
    pub fn split(&self, distance: f64) -> (f64, f64) {
        let rail = self.0 * distance;
        (distance - rail, rail)
    }
}

impl Default for RailAllocation {
    fn default() -> Self {
        Self(0.5)
    }
}

/// Unit processes that by construction do not ship anything: electricity, the transport
/// modes themselves and passenger operation.
pub fn is_transport_exempt(unit_process: &str, sources: &ElectricitySources) -> bool {
    unit_process == FUNCTIONAL_UNIT_PROCESS
        || TRANSPORT_MODE_PROCESSES.contains(&unit_process)
        || sources.columns().any(|c| c == unit_process)
}

/// Joins the trade schedule against the country-pair distance table.
pub fn transport_schedule(
    trade_schedule: &TradeSchedule,
    trade_distances: &[TradeDistance],
    sources: &ElectricitySources,
) -> Result<TransportSchedule> {
    let mut lookup: HashMap<(&str, &str), f64> = HashMap::with_capacity(trade_distances.len());
    for d in trade_distances {
        let key = (d.home_country.as_str(), d.producing_country.as_str());
        if lookup.insert(key, d.avg_export_distance).is_some() {
            return Err(HsrLcaError::DataIntegrity(format!(
                "duplicate trade distance for {} -> {}",
                d.home_country, d.producing_country
            )));
        }
    }

    let mut entries = Vec::with_capacity(trade_schedule.len());
    for trade in trade_schedule.entries() {
        let avg_export_distance = if is_transport_exempt(&trade.unit_process, sources) {
            0.0
        } else {
            let key = (trade.home_country.as_str(), trade.producing_country.as_str());
            let distance = lookup.get(&key).copied().ok_or_else(|| {
                HsrLcaError::DataIntegrity(format!(
                    "no trade distance from {} to {} (unit process '{}')",
                    trade.home_country, trade.producing_country, trade.unit_process
                ))
            })?;
            if !distance.is_finite() || distance < 0.0 {
                return Err(HsrLcaError::DataIntegrity(format!(
                    "trade distance from {} to {} is {}",
                    trade.home_country, trade.producing_country, distance
                )));
            }
            distance
        };
        entries.push(TransportEntry {
            unit_process: trade.unit_process.clone(),
            home_country: trade.home_country.clone(),
            producing_country: trade.producing_country.clone(),
            avg_export_distance,
        });
    }
    Ok(TransportSchedule { entries })
}

/// Writes lorry and rail transport requirements into the transport columns matching each
/// row's phase. Rows in phases that do not ship are left as they are.
pub fn transport_update(
    transport_schedule: &TransportSchedule,
    up_inputs_base: &UnitProcessTable,
    rail_allocation: RailAllocation,
) -> Result<UnitProcessTable> {
    let mut updated = up_inputs_base.clone();

    for entry in transport_schedule.entries() {
        let row = updated.position_of_label(&entry.unit_process).ok_or_else(|| {
            HsrLcaError::DataIntegrity(format!(
                "transport schedule names unknown unit process '{}'",
                entry.unit_process
            ))
        })?;
        let phase = updated.keys()[row].phase;
        let Some(pair) = columns::transport_columns(phase) else {
            continue;
        };

        let lorry_col = updated.require_column(pair.lorry)?;
        let rail_col = updated.require_column(pair.rail)?;
        let (lorry, rail) = rail_allocation.split(entry.avg_export_distance);
        updated.set_value(row, lorry_col, lorry);
        updated.set_value(row, rail_col, rail);
    }
    Ok(updated)
}
