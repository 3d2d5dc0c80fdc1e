//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading source spreadsheets.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Encoding Errors ===
    /// File carries a byte-order mark for an encoding this tool does not read.
    #[error("unsupported {encoding} encoding in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File bytes are malformed under the expected encoding.
    #[error("{path} is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Errors ===
    /// Failed to parse CSV records.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV has no non-empty rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// CSV ended before the configured header rows.
    #[error("{path}: found {found} of {expected} header rows")]
    MissingHeaderRows {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    // === Workbook Errors ===
    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheets.
    #[error("workbook has no worksheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    /// Worksheet has no header row.
    #[error("worksheet has no header row: {path}")]
    EmptySheet { path: PathBuf },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
