//! Keyed numeric tables passed between the calculation stages.
//!
//! Every stage takes tables by reference and returns new ones, so a snapshot handed to a later
//! stage is never modified behind its back.

use crate::error::{HsrLcaError, Result};
use hsrlca_schemas::phase::Phase;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A row key. The label is the name used when another table's columns are joined against
/// these rows.
pub trait RowKey: Clone + PartialEq + fmt::Debug {
    fn label(&self) -> &str;
    fn index_values(&self) -> Vec<String>;
}

/// Composite (phase, unit_process) row key of the requirements and emissions tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProcessKey {
    pub phase: Phase,
    pub unit_process: String,
}

impl ProcessKey {
    pub fn new(phase: Phase, unit_process: impl Into<String>) -> Self {
        Self {
            phase,
            unit_process: unit_process.into(),
        }
    }
}

impl RowKey for ProcessKey {
    fn label(&self) -> &str {
        &self.unit_process
    }

    fn index_values(&self) -> Vec<String> {
        vec![self.phase.as_str().to_string(), self.unit_process.clone()]
    }
}

impl RowKey for String {
    fn label(&self) -> &str {
        self
    }

    fn index_values(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl RowKey for Phase {
    fn label(&self) -> &str {
        self.as_str()
    }

    fn index_values(&self) -> Vec<String> {
        vec![self.as_str().to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table<K> {
    index_names: Vec<String>,
    keys: Vec<K>,
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

/// Requirements or emissions per unit of output, keyed by (phase, unit_process).
pub type UnitProcessTable = Table<ProcessKey>;

/// A table keyed by a free-form label such as a country, a fuel or a summary row name.
pub type LabeledTable = Table<String>;

pub type PhaseTable = Table<Phase>;

impl<K: RowKey> Table<K> {
    pub fn new<I, C>(index_names: I, columns: C) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(HsrLcaError::DataIntegrity(format!(
                    "duplicate column '{}'",
                    column
                )));
            }
        }
        Ok(Self {
            index_names: index_names.into_iter().map(Into::into).collect(),
            keys: Vec::new(),
            columns,
            values: Vec::new(),
        })
    }

    pub fn push_row(&mut self, key: K, values: Vec<f64>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(HsrLcaError::DataIntegrity(format!(
                "row '{}' has {} values but the table has {} columns",
                key.label(),
                values.len(),
                self.columns.len()
            )));
        }
        if self.position_of_label(key.label()).is_some() {
            return Err(HsrLcaError::DataIntegrity(format!(
                "duplicate row '{}'",
                key.label()
            )));
        }
        self.keys.push(key);
        self.values.push(values);
        Ok(())
    }

    pub fn index_names(&self) -> &[String] {
        &self.index_names
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn row(&self, position: usize) -> &[f64] {
        &self.values[position]
    }

    pub fn row_mut(&mut self, position: usize) -> &mut [f64] {
        &mut self.values[position]
    }

    pub fn rows(&self) -> impl Iterator<Item = (&K, &[f64])> {
        self.keys.iter().zip(self.values.iter().map(Vec::as_slice))
    }

    pub fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn position_of_label(&self, label: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.label() == label)
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_position(name).ok_or_else(|| {
            HsrLcaError::DataIntegrity(format!("required column '{}' is missing", name))
        })
    }

    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.values[row][column]
    }

    pub fn set_value(&mut self, row: usize, column: usize, value: f64) {
        self.values[row][column] = value;
    }

    /// Looks up a cell by row label and column name.
    pub fn get(&self, label: &str, column: &str) -> Option<f64> {
        let row = self.position_of_label(label)?;
        let col = self.column_position(column)?;
        Some(self.values[row][col])
    }

    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.columns.len()];
        for row in &self.values {
            for (sum, v) in sums.iter_mut().zip(row) {
                *sum += v;
            }
        }
        sums
    }

    /// Matrix product joined by name: each column of `self` is matched to the row of `rhs`
    /// with the same label. Both sides must line up exactly; an unmatched label on either side
    /// is an integrity error rather than an implicit zero.
    pub fn dot<R: RowKey>(&self, rhs: &Table<R>) -> Result<Table<K>> {
        let rhs_rows: HashMap<&str, usize> = rhs
            .keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.label(), i))
            .collect();

        let mut join = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let position = rhs_rows.get(column.as_str()).ok_or_else(|| {
                HsrLcaError::DataIntegrity(format!(
                    "matrices are not aligned: column '{}' has no matching row",
                    column
                ))
            })?;
            join.push(*position);
        }
        if let Some(orphan) = rhs
            .keys
            .iter()
            .find(|k| self.column_position(k.label()).is_none())
        {
            return Err(HsrLcaError::DataIntegrity(format!(
                "matrices are not aligned: row '{}' has no matching column",
                orphan.label()
            )));
        }

        let mut product = Table {
            index_names: self.index_names.clone(),
            keys: self.keys.clone(),
            columns: rhs.columns.clone(),
            values: Vec::with_capacity(self.len()),
        };
        for row in &self.values {
            let mut out = vec![0.0; rhs.columns.len()];
            for (quantity, &r) in row.iter().zip(&join) {
                if *quantity == 0.0 {
                    continue;
                }
                for (acc, factor) in out.iter_mut().zip(&rhs.values[r]) {
                    *acc += quantity * factor;
                }
            }
            product.values.push(out);
        }
        Ok(product)
    }
}

impl UnitProcessTable {
    /// Row positions belonging to `phase`, in table order.
    pub fn phase_positions(&self, phase: Phase) -> Vec<usize> {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, k)| k.phase == phase)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn unit_processes(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.unit_process.as_str())
    }
}
