use crate::error::Result;
use crate::table::{LabeledTable, PhaseTable, Table, UnitProcessTable};
use hsrlca_schemas::phase::{Phase, Stage};

/// Emissions released per unit of each unit process, counting its direct inputs.
pub fn emissions_schedule(
    up_inputs_complete: &UnitProcessTable,
    up_emissions_complete: &UnitProcessTable,
) -> Result<UnitProcessTable> {
    up_inputs_complete.dot(up_emissions_complete)
}

/// Emissions per functional unit attributable to each unit process.
pub fn emissions_total(
    total_requirements: &UnitProcessTable,
    emissions_schedule: &UnitProcessTable,
) -> Result<UnitProcessTable> {
    total_requirements.dot(emissions_schedule)
}

/// Sums emissions by phase. All nine phases are present, in their fixed order; a phase with
/// no unit processes is a row of zeros.
pub fn sum_phases(emissions_total: &UnitProcessTable) -> Result<PhaseTable> {
    let mut summary = Table::new(["phase"], emissions_total.columns().iter().cloned())?;
    for phase in Phase::ALL {
        let mut sums = vec![0.0; emissions_total.columns().len()];
        for row in emissions_total.phase_positions(phase) {
            for (sum, v) in sums.iter_mut().zip(emissions_total.row(row)) {
                *sum += v;
            }
        }
        summary.push_row(phase, sums)?;
    }
    Ok(summary)
}

/// Collapses the phase summary into the three reporting stages, labeled for `home_country`.
/// Electricity generation is already counted inside the phases that consume it.
pub fn condense_phase_sums(phase_summary: &PhaseTable, home_country: &str) -> Result<LabeledTable> {
    let mut condensed = Table::new(["stage"], phase_summary.columns().iter().cloned())?;
    for stage in Stage::ALL {
        let mut sums = vec![0.0; phase_summary.columns().len()];
        for row in stage.phases().iter().filter_map(|p| phase_summary.position(p)) {
            for (sum, v) in sums.iter_mut().zip(phase_summary.row(row)) {
                *sum += v;
            }
        }
        condensed.push_row(stage.label(home_country), sums)?;
    }
    Ok(condensed)
}
