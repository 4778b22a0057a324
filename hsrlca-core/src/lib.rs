//! Life-cycle impact model of a high-speed-rail network, normalized to one passenger-km.

pub mod calc;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod report;
pub mod scenario;
pub mod table;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{HsrLcaError, Result};
