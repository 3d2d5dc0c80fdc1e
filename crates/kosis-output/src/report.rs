//! JSON run report writing.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use kosis_model::RunReport;

use crate::csv::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Report path for an output CSV: `<stem>_report.json` in the same
/// directory.
pub fn report_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("output");
    output.with_file_name(format!("{stem}_report.json"))
}

/// Write the JSON run report next to its output CSV, returning the report
/// path.
pub fn write_run_report(report: &RunReport) -> Result<PathBuf> {
    let path = report_path(&report.output);
    ensure_parent_dir(&path)?;
    let json =
        serde_json::to_string_pretty(report).map_err(|source| OutputError::Json { source })?;
    fs::write(&path, format!("{json}\n")).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
