use crate::error::{HsrLcaError, Result};
use crate::table::{LabeledTable, Table, UnitProcessTable};
use hsrlca_schemas::{columns::ENERGY_SUPPLY_UNIT_SUFFIX, electricity::ElectricitySources, phase::Phase};

/// Allowed deviation of a country's fuel fractions from 1.0.
pub const MIX_TOLERANCE: f64 = 1e-9;

/// Converts raw national supply by fuel into fractional energy mixes.
///
/// The fuel columns lose their unit suffix (`coal_gw` becomes `coal`) so they can be joined
/// against the fuel rows of the unit energy emissions table.
pub fn energy_mixes(national_energy_supply: &LabeledTable, strict: bool) -> Result<LabeledTable> {
    let fuels = national_energy_supply.columns().iter().map(|c| {
        c.strip_suffix(ENERGY_SUPPLY_UNIT_SUFFIX)
            .unwrap_or(c)
            .to_string()
    });
    let mut mixes = Table::new(national_energy_supply.index_names().iter().cloned(), fuels)?;

    for (country, supply) in national_energy_supply.rows() {
        if let Some(bad) = supply.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(HsrLcaError::DataIntegrity(format!(
                "energy supply for {} contains {}",
                country, bad
            )));
        }
        let total: f64 = supply.iter().sum();
        if total <= 0.0 {
            return Err(HsrLcaError::DataIntegrity(format!(
                "{} has no national energy supply",
                country
            )));
        }
        mixes.push_row(country.clone(), supply.iter().map(|v| v / total).collect())?;
    }

    check_mix_totals(&mixes, strict)?;
    Ok(mixes)
}

/// Confirms every country's mix adds up to 100%. A country that does not is logged and
/// skipped over, or rejected in strict mode.
pub fn check_mix_totals(mixes: &LabeledTable, strict: bool) -> Result<()> {
    for (country, fractions) in mixes.rows() {
        let sum: f64 = fractions.iter().sum();
        if (sum - 1.0).abs() > MIX_TOLERANCE {
            if strict {
                return Err(HsrLcaError::DataIntegrity(format!(
                    "energy mix for {} sums to {} rather than 1",
                    country, sum
                )));
            }
            log::warn!(
                "energy mix for {} sums to {}; continuing with the unchecked mix",
                country,
                sum
            );
        }
    }
    Ok(())
}

/// Emissions per kWh for each country: its fuel mix dotted with per-fuel unit emissions.
pub fn energy_mix_emissions(
    national_energy_mixes: &LabeledTable,
    unit_energy_emissions: &LabeledTable,
) -> Result<LabeledTable> {
    national_energy_mixes.dot(unit_energy_emissions)
}

/// Replaces every electricity generation row of the emissions table with the unit emissions
/// of the country that row's electricity comes from.
pub fn emissions_update(
    up_emissions_base: &UnitProcessTable,
    energy_mix_emissions: &LabeledTable,
    sources: &ElectricitySources,
) -> Result<UnitProcessTable> {
    let mut complete = up_emissions_base.clone();

    let column_map = complete
        .columns()
        .iter()
        .map(|species| {
            energy_mix_emissions.column_position(species).ok_or_else(|| {
                HsrLcaError::DataIntegrity(format!(
                    "unit energy emissions do not cover '{}'",
                    species
                ))
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    for row in complete.phase_positions(Phase::ElectricityGeneration) {
        let unit_process = complete.keys()[row].unit_process.clone();
        let country = sources
            .country_for(&unit_process)
            .ok_or_else(|| HsrLcaError::UnknownCountry(unit_process.clone()))?;
        let source_row = energy_mix_emissions
            .position_of_label(country)
            .ok_or_else(|| HsrLcaError::UnknownCountry(country.to_string()))?;

        let per_kwh = energy_mix_emissions.row(source_row);
        for (target, &source) in complete.row_mut(row).iter_mut().zip(&column_map) {
            *target = per_kwh[source];
        }
    }
    Ok(complete)
}
