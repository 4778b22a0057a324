//! Back-propagation of per-unit requirements into the totals needed for one functional unit.
//!
//! The phase graph is fixed. Each entry of [`PROPAGATION_ORDER`] names a phase and the phases
//! that consume its output. A phase's totals are only correct once every consumer has been
//! finalized, so the table is ordered from the functional unit backwards.

use crate::error::{HsrLcaError, Result};
use crate::table::UnitProcessTable;
use hsrlca_schemas::phase::Phase;

/// The phase that delivers the functional unit. Its rows are the base case and keep their
/// input values.
pub const TERMINAL_PHASE: Phase = Phase::PassengerTransportation;

pub type PropagationStep = (Phase, &'static [Phase]);

pub const PROPAGATION_ORDER: [PropagationStep; 8] = [
    (
        Phase::FinalComponentProduction,
        &[Phase::PassengerTransportation],
    ),
    (
        Phase::FinalComponentTransportation,
        &[Phase::FinalComponentProduction],
    ),
    (
        Phase::IntermediateComponentProductionII,
        &[Phase::FinalComponentProduction, Phase::PassengerTransportation],
    ),
    (
        Phase::IntermediateComponentProductionI,
        &[
            Phase::IntermediateComponentProductionII,
            Phase::FinalComponentProduction,
            Phase::PassengerTransportation,
        ],
    ),
    (
        Phase::IntermediateComponentTransportation,
        &[
            Phase::IntermediateComponentProductionI,
            Phase::IntermediateComponentProductionII,
        ],
    ),
    (
        Phase::RawMaterialExtraction,
        &[
            Phase::IntermediateComponentProductionI,
            Phase::IntermediateComponentProductionII,
            Phase::FinalComponentProduction,
            Phase::PassengerTransportation,
        ],
    ),
    (
        Phase::RawMaterialTransportation,
        &[Phase::RawMaterialExtraction],
    ),
    (
        Phase::ElectricityGeneration,
        &[
            Phase::RawMaterialExtraction,
            Phase::IntermediateComponentProductionI,
            Phase::IntermediateComponentProductionII,
            Phase::FinalComponentProduction,
            Phase::PassengerTransportation,
        ],
    ),
];

/// Checks the built-in propagation order.
pub fn validate_topology() -> Result<()> {
    validate_order(&PROPAGATION_ORDER)
}

/// Every phase except the terminal one must be propagated exactly once, and only after all of
/// its consumers.
pub fn validate_order(order: &[PropagationStep]) -> Result<()> {
    let mut finalized = vec![TERMINAL_PHASE];
    for (phase, consumers) in order {
        if finalized.contains(phase) {
            return Err(HsrLcaError::ConfigError(format!(
                "phase '{}' is propagated more than once or is the terminal phase",
                phase
            )));
        }
        if consumers.is_empty() {
            return Err(HsrLcaError::ConfigError(format!(
                "phase '{}' has no consuming phases",
                phase
            )));
        }
        if let Some(pending) = consumers.iter().find(|q| !finalized.contains(q)) {
            return Err(HsrLcaError::ConfigError(format!(
                "phase '{}' is propagated before its consumer '{}'",
                phase, pending
            )));
        }
        finalized.push(*phase);
    }

    if let Some(missing) = Phase::ALL.iter().find(|p| !finalized.contains(p)) {
        return Err(HsrLcaError::ConfigError(format!(
            "phase '{}' is never propagated",
            missing
        )));
    }
    Ok(())
}

/// Total requirements per functional unit for every unit process.
///
/// For a row `u` in phase `P` the downstream multiplier is the sum of column `u` over every
/// already-finalized row of `P`'s consumers, and the row's totals are its inputs scaled by
/// that multiplier.
pub fn total_requirements(up_inputs_complete: &UnitProcessTable) -> Result<UnitProcessTable> {
    let mut totals = up_inputs_complete.clone();

    for (phase, consumers) in PROPAGATION_ORDER.iter() {
        let consumer_rows: Vec<usize> = consumers
            .iter()
            .flat_map(|q| totals.phase_positions(*q))
            .collect();

        for row in totals.phase_positions(*phase) {
            let unit_process = &totals.keys()[row].unit_process;
            let column = totals.column_position(unit_process).ok_or_else(|| {
                HsrLcaError::DataIntegrity(format!(
                    "unit process '{}' ({}) has no matching requirements column",
                    unit_process, phase
                ))
            })?;

            let multiplier: f64 = consumer_rows.iter().map(|&r| totals.value(r, column)).sum();
            let scaled: Vec<f64> = up_inputs_complete
                .row(row)
                .iter()
                .map(|v| v * multiplier)
                .collect();
            totals.row_mut(row).copy_from_slice(&scaled);
        }
        log::debug!("propagated requirements through {}", phase);
    }
    Ok(totals)
}
