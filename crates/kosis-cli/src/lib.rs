//! Library components for the KOSIS preprocessing CLI.

pub mod logging;
pub mod pipeline;
