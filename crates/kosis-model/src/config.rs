use std::path::PathBuf;

use crate::gdp::{NATIONWIDE_LABEL, REGION_LABEL};

/// Configuration for one regional GDP reshape run.
///
/// Defaults carry the standard extract layout; the CLI overrides paths and
/// tests override whatever the scenario needs.
#[derive(Debug, Clone)]
pub struct GdpJob {
    /// Source CSV, a CP949 KOSIS export.
    pub input: PathBuf,
    /// Destination CSV.
    pub output: PathBuf,
    /// Expected header label of the leading region column.
    pub region_label: String,
    /// Region label of aggregate rows dropped before reshaping.
    pub aggregate_label: String,
    /// Vestigial leading rows discarded before the two header rows.
    pub skip_rows: usize,
}

impl Default for GdpJob {
    fn default() -> Self {
        Self {
            input: PathBuf::from("raw_data/regional_GDP.csv"),
            output: PathBuf::from("processed_data/preprocessed_regional_gdp.csv"),
            region_label: REGION_LABEL.to_string(),
            aggregate_label: NATIONWIDE_LABEL.to_string(),
            skip_rows: 1,
        }
    }
}

/// Configuration for one combined school projection run.
#[derive(Debug, Clone)]
pub struct SchoolJob {
    /// Source workbook.
    pub input: PathBuf,
    /// Destination CSV.
    pub output: PathBuf,
}

impl Default for SchoolJob {
    fn default() -> Self {
        Self {
            input: PathBuf::from("raw_data/combined_school.xlsx"),
            output: PathBuf::from("processed_data/preprocessed_combined_school.csv"),
        }
    }
}
