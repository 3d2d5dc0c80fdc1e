pub mod config;
pub mod gdp;
pub mod report;
pub mod school;

pub use config::{GdpJob, SchoolJob};
pub use gdp::{
    INDICATOR_RENAMES, NATIONWIDE_LABEL, REGION_COLUMN, REGION_LABEL, YEAR_COLUMN, indicator_rename,
};
pub use report::{REPORT_SCHEMA, REPORT_SCHEMA_VERSION, RunReport};
pub use school::{FieldKind, SCHOOL_FIELDS, SchoolField};
