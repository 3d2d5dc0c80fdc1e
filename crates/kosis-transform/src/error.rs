//! Error types for table reshaping.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while reshaping or typing a table.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Header Errors ===
    /// The first header cell does not carry the expected region label.
    #[error("expected region column '{expected}', found '{found}'")]
    RegionColumnMismatch { expected: String, found: String },

    /// A year header token reduced to no digits.
    #[error("column {column}: year header '{token}' contains no digits")]
    BlankYearHeader { column: usize, token: String },

    /// Two source columns flattened to the same combined name.
    #[error("columns {first} and {second} both flatten to '{name}'")]
    HeaderCollision {
        name: String,
        first: usize,
        second: usize,
    },

    // === Melt Errors ===
    /// A combined column key has no year separator.
    #[error("column '{key}' has no year separator")]
    MissingYearSeparator { key: String },

    /// The year side of a combined column key is not an integer.
    #[error("column '{key}': year '{token}' is not an integer")]
    YearNotInteger { key: String, token: String },

    // === Projection Errors ===
    /// A required source column is absent.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// A count cell is not a whole number. Rows count from the first data
    /// row.
    #[error("{column} row {row}: '{value}' is not a whole number")]
    CountNotInteger {
        column: String,
        row: usize,
        value: String,
    },

    /// A count cell does not fit a 16-bit integer.
    #[error("{column} row {row}: {value} does not fit a 16-bit integer")]
    CountOutOfRange {
        column: String,
        row: usize,
        value: i64,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<PolarsError> for TransformError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
