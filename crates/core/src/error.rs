//! Configuration errors
//!
//! Invalid configuration is rejected up front and never clamped. Out-of-range
//! grid indices are defects and panic instead of returning an error.

use derive_more::{Display, Error};

/// Invalid-configuration signal returned by constructors and validators
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ConfigError {
    /// A probability was NaN or outside [0, 1]
    #[display("{name} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Parameter name (e.g. `"p_grow"`)
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Grid size of zero
    #[display("grid size must be positive, got {_0}")]
    NonPositiveGridSize(#[error(not(source))] usize),

    /// No rows or no columns supplied
    #[display("grid must contain at least one row and one column")]
    EmptyGrid,

    /// Rows of differing lengths
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// Grid dimensions disagree with the configured grid size
    #[display("grid is {width}x{height}, expected {size}x{size}")]
    DimensionMismatch {
        /// Configured grid size
        size: usize,
        /// Supplied grid width
        width: usize,
        /// Supplied grid height
        height: usize,
    },

    /// Categorical index that names no cell state
    #[display("invalid cell state index {_0}, expected 0, 1 or 2")]
    InvalidCellIndex(#[error(not(source))] u8),
}

/// Check that `value` is a finite probability in [0, 1]
///
/// # Errors
///
/// Returns [`ConfigError::ProbabilityOutOfRange`] when the check fails, NaN included.
pub fn check_probability(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
