//! Output writing for KOSIS preprocessing: BOM-prefixed CSV serialization,
//! atomic file replacement, and JSON run reports.

pub mod csv;
pub mod error;
pub mod report;

pub use csv::{frame_to_csv_bytes, write_atomic};
pub use error::{OutputError, Result};
pub use report::{report_path, write_run_report};
