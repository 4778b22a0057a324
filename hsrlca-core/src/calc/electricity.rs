use super::trade::TradeSchedule;
use crate::error::{HsrLcaError, Result};
use crate::table::UnitProcessTable;
use hsrlca_schemas::{electricity::ElectricitySources, phase::Phase};

/// Moves each unit process's electricity demand from the home country's grid to the grid of
/// the country the trade schedule says produces it.
///
/// The base table books all electricity against the home country. After this step exactly one
/// electricity column per row carries that demand.
pub fn electricity_source_update(
    up_inputs: &UnitProcessTable,
    trade_schedule: &TradeSchedule,
    home_country: &str,
    sources: &ElectricitySources,
) -> Result<UnitProcessTable> {
    let home_column = sources
        .column_for(home_country)
        .ok_or_else(|| HsrLcaError::UnknownCountry(home_country.to_string()))?;
    let home_col = up_inputs.require_column(home_column)?;

    let mut updated = up_inputs.clone();
    for row in 0..updated.len() {
        let key = &updated.keys()[row];
        if key.phase == Phase::ElectricityGeneration {
            continue;
        }
        let producer = trade_schedule.producing_country(&key.unit_process)?;
        if producer == home_country {
            continue;
        }
        let target_column = sources
            .column_for(producer)
            .ok_or_else(|| HsrLcaError::UnknownCountry(producer.to_string()))?;
        let target_col = updated.require_column(target_column)?;

        let demand = updated.value(row, home_col);
        updated.set_value(row, target_col, demand);
        updated.set_value(row, home_col, 0.0);
    }
    Ok(updated)
}
