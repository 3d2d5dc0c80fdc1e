//! Error types for output writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing pipeline outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed filesystem operation.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the frame as CSV.
    #[error("failed to serialize CSV: {message}")]
    Csv { message: String },

    /// Failed to serialize the run report.
    #[error("failed to serialize run report: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
