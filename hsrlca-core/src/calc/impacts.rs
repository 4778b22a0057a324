use crate::error::{HsrLcaError, Result};
use crate::table::{LabeledTable, Table};
use hsrlca_schemas::{phase::ImpactCategory, records::ConversionFactor};

/// Equivalency factors grouped by impact category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionTable {
    factors: Vec<(ImpactCategory, String, f64)>,
}

impl ConversionTable {
    /// Keeps the records whose category is recognized. Any other category is dropped with a
    /// warning, or rejected in strict mode. A later record for the same (category, emission)
    /// replaces an earlier one.
    pub fn from_records(records: &[ConversionFactor], strict: bool) -> Result<Self> {
        let mut table = ConversionTable::default();
        for record in records {
            let Some(category) = ImpactCategory::parse(&record.category) else {
                if strict {
                    return Err(HsrLcaError::CategoryMismatch {
                        emission: record.emission.clone(),
                        category: record.category.clone(),
                    });
                }
                log::warn!(
                    "conversion entry for {} has unrecognized category '{}'; excluded from all impact totals",
                    record.emission,
                    record.category
                );
                continue;
            };
            table.insert(category, &record.emission, record.conversion);
        }
        Ok(table)
    }

    fn insert(&mut self, category: ImpactCategory, emission: &str, conversion: f64) {
        match self
            .factors
            .iter_mut()
            .find(|(c, e, _)| *c == category && e == emission)
        {
            Some(entry) => entry.2 = conversion,
            None => self.factors.push((category, emission.to_string(), conversion)),
        }
    }

    /// All (category, factor) pairs an emission species contributes to.
    pub fn factors_for<'a>(&'a self, emission: &'a str) -> impl Iterator<Item = (ImpactCategory, f64)> + 'a {
        self.factors
            .iter()
            .filter(move |(_, e, _)| e == emission)
            .map(|(c, _, f)| (*c, *f))
    }
}

/// Converts each stage's emissions into the three equivalent-emissions totals. The per-species
/// columns are not carried into the output.
pub fn phase_impacts(
    condensed: &LabeledTable,
    conversion: &ConversionTable,
    strict: bool,
) -> Result<LabeledTable> {
    // (species column, output column, factor)
    let mut contributions: Vec<(usize, usize, f64)> = Vec::new();
    for (col, species) in condensed.columns().iter().enumerate() {
        let before = contributions.len();
        for (category, factor) in conversion.factors_for(species) {
            contributions.push((col, output_index(category), factor));
        }
        if contributions.len() == before {
            if strict {
                return Err(HsrLcaError::CategoryMismatch {
                    emission: species.clone(),
                    category: "none".to_string(),
                });
            }
            log::warn!(
                "emission '{}' has no impact category; excluded from impact totals",
                species
            );
        }
    }

    let mut impacts = Table::new(
        condensed.index_names().iter().cloned(),
        ImpactCategory::ALL.iter().map(|c| c.output_column()),
    )?;
    for (label, emissions) in condensed.rows() {
        let mut totals = [0.0; 3];
        for &(col, output, factor) in &contributions {
            totals[output] += emissions[col] * factor;
        }
        impacts.push_row(label.clone(), totals.to_vec())?;
    }
    Ok(impacts)
}

fn output_index(category: ImpactCategory) -> usize {
    match category {
        ImpactCategory::GlobalWarmingPotential => 0,
        ImpactCategory::AirAcidificationPotential => 1,
        ImpactCategory::ParticulateMatterPotential => 2,
    }
}

/// Sums stage impacts into the single lifetime row `total_impacts_<home_country>`.
pub fn lifetime_impacts(stage_impacts: &LabeledTable, home_country: &str) -> Result<LabeledTable> {
    let mut lifetime = Table::new(["scenario"], stage_impacts.columns().iter().cloned())?;
    lifetime.push_row(lifetime_label(home_country), stage_impacts.column_sums())?;
    Ok(lifetime)
}

pub fn lifetime_label(home_country: &str) -> String {
    format!("total_impacts_{}", home_country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::emissions::{condense_phase_sums, sum_phases};
    use crate::fixtures::{self, assert_close};
    use crate::table::ProcessKey;
    use hsrlca_schemas::phase::Phase;

    fn factor(category: &str, emission: &str, conversion: f64) -> ConversionFactor {
        ConversionFactor {
            category: category.to_string(),
            emission: emission.to_string(),
            conversion,
        }
    }

    #[test]
    fn test_co2_equivalents_add_weighted_species() {
        let conversion = ConversionTable::from_records(
            &[
                factor("global_warming_potential", "CO2", 1.0),
                factor("global_warming_potential", "CH4", 25.0),
            ],
            true,
        )
        .unwrap();
        let condensed = fixtures::labeled("stage", &["CO2", "CH4"], &[("operation_Thailand", &[2.0, 1.0])]);
        let impacts = phase_impacts(&condensed, &conversion, true).unwrap();

        assert_eq!(impacts.get("operation_Thailand", "CO2_eq_kg"), Some(27.0));
        assert_eq!(impacts.get("operation_Thailand", "SO2_eq_kg"), Some(0.0));
        assert_eq!(
            impacts.columns(),
            &["CO2_eq_kg".to_string(), "SO2_eq_kg".to_string(), "PM25_eq_kg".to_string()]
        );
    }

    #[test]
    fn test_species_may_count_in_several_categories() {
        let conversion = ConversionTable::from_records(
            &[
                factor("air_acidification_potential", "NOx", 0.7),
                factor("particulate_matter_potential", "NOx", 0.2),
            ],
            false,
        )
        .unwrap();
        let condensed = fixtures::labeled("stage", &["NOx"], &[("construction_China", &[10.0])]);
        let impacts = phase_impacts(&condensed, &conversion, false).unwrap();
        assert_close(impacts.get("construction_China", "SO2_eq_kg").unwrap(), 7.0);
        assert_close(impacts.get("construction_China", "PM25_eq_kg").unwrap(), 2.0);
    }

    #[test]
    fn test_unknown_category_is_soft_unless_strict() {
        let records = [
            factor("global_warming_potential", "CO2", 1.0),
            factor("ozone_depletion_potential", "CFC11", 1.0),
        ];
        let lenient = ConversionTable::from_records(&records, false).unwrap();
        assert_eq!(lenient.factors_for("CFC11").count(), 0);
        assert!(matches!(
            ConversionTable::from_records(&records, true),
            Err(HsrLcaError::CategoryMismatch { emission, .. }) if emission == "CFC11"
        ));

        let condensed = fixtures::labeled("stage", &["CO2", "CFC11"], &[("operation_Laos", &[1.0, 5.0])]);
        let impacts = phase_impacts(&condensed, &lenient, false).unwrap();
        assert_eq!(impacts.get("operation_Laos", "CO2_eq_kg"), Some(1.0));
        assert!(phase_impacts(&condensed, &lenient, true).is_err());
    }

    #[test]
    fn test_passenger_only_model_lifetime_equals_operation() {
        let mut total = Table::new(["phase", "unit_process"], fixtures::SPECIES).unwrap();
        total
            .push_row(
                ProcessKey::new(Phase::PassengerTransportation, "high_speed_rail_operation_p-km"),
                vec![0.03, 0.0001, 0.0002, 0.00001],
            )
            .unwrap();
        total
            .push_row(ProcessKey::new(Phase::RawMaterialExtraction, "steel_kg"), vec![0.0; 4])
            .unwrap();

        let conversion = ConversionTable::from_records(&fixtures::conversion_factors(), true).unwrap();
        let condensed = condense_phase_sums(&sum_phases(&total).unwrap(), "Myanmar").unwrap();
        let stages = phase_impacts(&condensed, &conversion, true).unwrap();
        let lifetime = lifetime_impacts(&stages, "Myanmar").unwrap();

        assert_eq!(lifetime.len(), 1);
        assert_eq!(lifetime.keys()[0], "total_impacts_Myanmar");
        for column in ["CO2_eq_kg", "SO2_eq_kg", "PM25_eq_kg"] {
            assert_eq!(
                lifetime.get("total_impacts_Myanmar", column),
                stages.get("operation_Myanmar", column)
            );
        }
        assert_eq!(stages.get("operation_Myanmar", "CO2_eq_kg"), Some(0.03 + 0.0001 * 25.0));
    }
}
