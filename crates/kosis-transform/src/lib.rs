//! Table reshaping for KOSIS statistical extracts.
//!
//! - [`flatten`]: two-row header collapsing for the GDP extract
//! - [`reshape`]: aggregate-row filtering, melt, and first-wins pivot
//! - [`gdp`]: the final typed GDP table
//! - [`school`]: column projection and typing for the school workbook

pub mod error;
pub mod flatten;
pub mod gdp;
pub mod reshape;
pub mod school;

pub use error::{Result, TransformError};
pub use flatten::{flatten_headers, year_digits};
pub use gdp::{GdpFrame, build_gdp_frame};
pub use reshape::{LongRecord, PivotedTable, drop_aggregate_rows, melt, pivot_first};
pub use school::build_school_frame;
