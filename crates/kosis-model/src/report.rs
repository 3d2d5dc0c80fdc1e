use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Schema identifier written into every run report.
pub const REPORT_SCHEMA: &str = "kosis-prep/run-report";

/// Schema version written into every run report.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Summary of one finished pipeline run, written as JSON next to the
/// output CSV.
///
/// The payload carries no timestamps, so rerunning an unchanged input
/// produces byte-identical report files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Schema identifier for report consumers.
    pub schema: String,
    pub schema_version: u32,
    /// Dataset label, `regional_gdp` or `combined_school`.
    pub dataset: String,
    /// Source file the run read.
    pub input: PathBuf,
    /// CSV the run wrote, or would write for a dry run.
    pub output: PathBuf,
    /// Output row count.
    pub rows: usize,
    /// Output column names in order.
    pub columns: Vec<String>,
    /// Missing cells per coerced value column.
    pub missing_by_column: BTreeMap<String, usize>,
    /// Observations discarded by the first-wins pivot.
    pub duplicates_dropped: usize,
}

impl RunReport {
    /// Create an empty report for a dataset with the current schema tag.
    pub fn new(dataset: impl Into<String>, input: PathBuf, output: PathBuf) -> Self {
        Self {
            schema: REPORT_SCHEMA.to_string(),
            schema_version: REPORT_SCHEMA_VERSION,
            dataset: dataset.into(),
            input,
            output,
            rows: 0,
            columns: Vec::new(),
            missing_by_column: BTreeMap::new(),
            duplicates_dropped: 0,
        }
    }

    /// Total missing cells across all coerced columns.
    pub fn missing_total(&self) -> usize {
        self.missing_by_column.values().sum()
    }
}
