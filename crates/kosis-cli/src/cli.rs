//! CLI argument definitions for the KOSIS preprocessing tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "kosis-prep",
    version,
    about = "KOSIS preprocessing - reshape statistical extracts into analysis-ready CSV",
    long_about = "Reshape KOSIS statistical extracts into analysis-ready CSV files.\n\n\
                  Pivots the regional per-capita GDP extract from wide year/indicator\n\
                  columns into one row per region and year, and projects the combined\n\
                  school workbook onto its typed analysis columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reshape the regional per-capita GDP extract.
    Gdp(GdpArgs),

    /// Project the combined school workbook.
    School(SchoolArgs),
}

#[derive(Parser)]
pub struct GdpArgs {
    /// Source CSV (default: raw_data/regional_GDP.csv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Destination CSV (default: processed_data/preprocessed_regional_gdp.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run the full reshape and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SchoolArgs {
    /// Source workbook (default: raw_data/combined_school.xlsx).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Destination CSV (default: processed_data/preprocessed_combined_school.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run the full projection and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
