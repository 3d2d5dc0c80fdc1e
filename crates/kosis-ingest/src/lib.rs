//! Source spreadsheet ingestion for KOSIS statistical extracts.
//!
//! - [`encoding`]: byte decoding for CP949 CSV exports
//! - [`table`]: CSV parsing into trimmed string-cell tables
//! - [`workbook`]: first-worksheet extraction from XLSX files
//! - [`numeric`]: shared cell parsing and formatting helpers

pub mod encoding;
pub mod error;
pub mod numeric;
pub mod table;
pub mod workbook;

pub use encoding::{SourceEncoding, decode_bytes};
pub use error::{IngestError, Result};
pub use numeric::{format_numeric, parse_f64, parse_i64};
pub use table::{CsvTable, TwoHeaderTable, read_csv_table, read_two_header_table};
pub use workbook::{read_workbook_table, sheet_to_table};
