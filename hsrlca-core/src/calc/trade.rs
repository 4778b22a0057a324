use crate::error::{HsrLcaError, Result};
use crate::table::UnitProcessTable;
use hsrlca_schemas::{electricity::ElectricitySources, records::ProducingCountry};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeEntry {
    pub unit_process: String,
    pub home_country: String,
    #[serde(rename = "up_countries")]
    pub producing_country: String,
}

/// Which country produces each unit process, in the row order of the base requirements table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TradeSchedule {
    entries: Vec<TradeEntry>,
}

impl TradeSchedule {
    pub fn entries(&self) -> &[TradeEntry] {
        &self.entries
    }

    pub fn get(&self, unit_process: &str) -> Option<&TradeEntry> {
        self.entries.iter().find(|e| e.unit_process == unit_process)
    }

    pub fn producing_country(&self, unit_process: &str) -> Result<&str> {
        self.get(unit_process)
            .map(|e| e.producing_country.as_str())
            .ok_or_else(|| {
                HsrLcaError::DataIntegrity(format!(
                    "unit process '{}' is missing from the trade schedule",
                    unit_process
                ))
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the trade schedule for `home_country`.
///
/// When every assignment row names its unit process the assignment is re-indexed by name;
/// when none do it must line up with the base table row for row.
pub fn trade_schedule(
    home_country: &str,
    up_countries: &[ProducingCountry],
    up_inputs_base: &UnitProcessTable,
    sources: &ElectricitySources,
) -> Result<TradeSchedule> {
    if !sources.contains_country(home_country) {
        return Err(HsrLcaError::UnknownCountry(home_country.to_string()));
    }

    let named = up_countries.iter().filter(|p| p.unit_process.is_some()).count();
    let producers: Vec<&str> = if named == 0 {
        if up_countries.len() != up_inputs_base.len() {
            return Err(HsrLcaError::DataIntegrity(format!(
                "positional producing-country assignment has {} rows but there are {} unit processes",
                up_countries.len(),
                up_inputs_base.len()
            )));
        }
        up_countries.iter().map(|p| p.producing_country.as_str()).collect()
    } else if named == up_countries.len() {
        reindex_by_name(up_countries, up_inputs_base)?
    } else {
        return Err(HsrLcaError::DataIntegrity(
            "producing-country assignment mixes named and unnamed rows".to_string(),
        ));
    };

    let mut entries = Vec::with_capacity(producers.len());
    for (unit_process, producer) in up_inputs_base.unit_processes().zip(producers) {
        if !sources.contains_country(producer) {
            return Err(HsrLcaError::UnknownCountry(producer.to_string()));
        }
        entries.push(TradeEntry {
            unit_process: unit_process.to_string(),
            home_country: home_country.to_string(),
            producing_country: producer.to_string(),
        });
    }
    Ok(TradeSchedule { entries })
}

fn reindex_by_name<'a>(
    up_countries: &'a [ProducingCountry],
    up_inputs_base: &UnitProcessTable,
) -> Result<Vec<&'a str>> {
    let mut by_name: HashMap<&str, &str> = HashMap::with_capacity(up_countries.len());
    for row in up_countries {
        let name = row.unit_process.as_deref().unwrap_or_default();
        if up_inputs_base.position_of_label(name).is_none() {
            return Err(HsrLcaError::DataIntegrity(format!(
                "producing country assigned to unknown unit process '{}'",
                name
            )));
        }
        if by_name.insert(name, row.producing_country.as_str()).is_some() {
            return Err(HsrLcaError::DataIntegrity(format!(
                "unit process '{}' is assigned more than once",
                name
            )));
        }
    }

    up_inputs_base
        .unit_processes()
        .map(|up| {
            by_name.get(up).copied().ok_or_else(|| {
                HsrLcaError::DataIntegrity(format!(
                    "unit process '{}' has no producing country",
                    up
                ))
            })
        })
        .collect()
}
