//! Readers for the delimited input files.
//!
//! Wide tables (one column per resource, emission species or fuel) are read into [`Table`]s;
//! narrow lookup files are deserialized row by row with serde.

use crate::error::{HsrLcaError, Result};
use crate::table::{LabeledTable, ProcessKey, RowKey, Table, UnitProcessTable};
use hsrlca_schemas::phase::Phase;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| HsrLcaError::FileIO(path.display().to_string(), e))
}

/// Reads a table whose first two columns are `phase` and `unit_process`.
pub fn read_unit_process_table(path: &Path) -> Result<UnitProcessTable> {
    read_unit_process_table_from(open(path)?, &path.display().to_string())
}

pub fn read_unit_process_table_from<R: Read>(reader: R, source: &str) -> Result<UnitProcessTable> {
    read_wide(reader, source, 2, |fields| {
        let phase = fields[0]
            .parse::<Phase>()
            .map_err(|_| HsrLcaError::UnknownPhase(fields[0].to_string()))?;
        Ok(ProcessKey::new(phase, fields[1]))
    })
}

/// Reads a table keyed by its first column, e.g. `country` or `fuel`.
pub fn read_labeled_table(path: &Path) -> Result<LabeledTable> {
    read_labeled_table_from(open(path)?, &path.display().to_string())
}

pub fn read_labeled_table_from<R: Read>(reader: R, source: &str) -> Result<LabeledTable> {
    read_wide(reader, source, 1, |fields| Ok(fields[0].to_string()))
}

/// Deserializes every row of a narrow CSV file into `T`.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    read_records_from(open(path)?, &path.display().to_string())
}

pub fn read_records_from<T: DeserializeOwned, R: Read>(reader: R, source: &str) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.map_err(|e| HsrLcaError::CsvError(source.to_string(), e))?;
        records.push(record);
    }
    Ok(records)
}

fn read_wide<K, R, F>(reader: R, source: &str, key_width: usize, make_key: F) -> Result<Table<K>>
where
    K: RowKey,
    R: Read,
    F: Fn(&[&str]) -> Result<K>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| HsrLcaError::CsvError(source.to_string(), e))?
        .clone();
    if headers.len() < key_width {
        return Err(HsrLcaError::DataIntegrity(format!(
            "{}: expected at least {} key columns, found {}",
            source,
            key_width,
            headers.len()
        )));
    }

    let mut table = Table::new(
        headers.iter().take(key_width),
        headers.iter().skip(key_width),
    )?;

    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| HsrLcaError::CsvError(source.to_string(), e))?;
        // header is line 1
        let line = i + 2;
        let fields: Vec<&str> = record.iter().take(key_width).collect();
        let key = make_key(&fields)?;
        let values = headers
            .iter()
            .skip(key_width)
            .zip(record.iter().skip(key_width))
            .map(|(column, raw)| parse_cell(raw, source, line, column))
            .collect::<Result<Vec<f64>>>()?;
        table.push_row(key, values)?;
    }
    Ok(table)
}

fn parse_cell(raw: &str, source: &str, line: usize, column: &str) -> Result<f64> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>().map_err(|_| {
        HsrLcaError::DataIntegrity(format!(
            "{}: line {}, column '{}': '{}' is not a number",
            source, line, column, raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsrlca_schemas::records::{ConversionFactor, ProducingCountry, TradeDistance};

    #[test]
    fn test_read_unit_process_table() {
        let csv = "phase,unit_process,steel_kg,electricity_Thailand_kWh\n\
                   raw_material_extraction,steel_kg,0,0.5\n\
                   intermediate_component_production_i,rail_km, 120 ,\n";
        let table = read_unit_process_table_from(csv.as_bytes(), "inputs.csv").unwrap();
        assert_eq!(table.index_names(), &["phase".to_string(), "unit_process".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.keys()[1], ProcessKey::new(Phase::IntermediateComponentProductionI, "rail_km"));
        assert_eq!(table.get("rail_km", "steel_kg"), Some(120.0));
        assert_eq!(table.get("rail_km", "electricity_Thailand_kWh"), Some(0.0));
    }

    #[test]
    fn test_unknown_phase_is_rejected() {
        let csv = "phase,unit_process,steel_kg\nsmelting,steel_kg,0\n";
        let err = read_unit_process_table_from(csv.as_bytes(), "inputs.csv").unwrap_err();
        assert!(matches!(err, HsrLcaError::UnknownPhase(p) if p == "smelting"));
    }

    #[test]
    fn test_bad_number_names_the_cell() {
        let csv = "country,coal_gw,hydro_gw\nChina,12.5,n/a\n";
        let err = read_labeled_table_from(csv.as_bytes(), "supply.csv").unwrap_err();
        match err {
            HsrLcaError::DataIntegrity(msg) => {
                assert!(msg.contains("supply.csv"));
                assert!(msg.contains("line 2"));
                assert!(msg.contains("hydro_gw"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_ragged_row_is_a_csv_error() {
        let csv = "country,coal_gw,hydro_gw\nChina,12.5\n";
        let err = read_labeled_table_from(csv.as_bytes(), "supply.csv").unwrap_err();
        assert!(matches!(err, HsrLcaError::CsvError(..)));
    }

    #[test]
    fn test_read_record_files() {
        let distances = "home_country,up_countries,avg_export_distance\nThailand,China,1000\n";
        let distances: Vec<TradeDistance> = read_records_from(distances.as_bytes(), "d.csv").unwrap();
        assert_eq!(distances[0].producing_country, "China");
        assert_eq!(distances[0].avg_export_distance, 1000.0);

        let factors = "category,emission,conversion\nglobal_warming_potential,CH4,25\n";
        let factors: Vec<ConversionFactor> = read_records_from(factors.as_bytes(), "c.csv").unwrap();
        assert_eq!(factors[0].emission, "CH4");

        let named = "unit_process,up_countries\nsteel_kg,China\n";
        let named: Vec<ProducingCountry> = read_records_from(named.as_bytes(), "u.csv").unwrap();
        assert_eq!(named[0].unit_process.as_deref(), Some("steel_kg"));

        let positional = "up_countries\nChina\nThailand\n";
        let positional: Vec<ProducingCountry> =
            read_records_from(positional.as_bytes(), "u.csv").unwrap();
        assert_eq!(positional.len(), 2);
        assert!(positional.iter().all(|p| p.unit_process.is_none()));
    }
}
