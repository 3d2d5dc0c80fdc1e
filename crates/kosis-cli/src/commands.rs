//! Subcommand entry points: build a job from CLI arguments and run it.

use anyhow::Result;

use kosis_cli::pipeline::{self, RunOutcome};
use kosis_model::{GdpJob, SchoolJob};

use crate::cli::{GdpArgs, SchoolArgs};

pub fn run_gdp(args: &GdpArgs) -> Result<RunOutcome> {
    let mut job = GdpJob::default();
    if let Some(input) = &args.input {
        job.input = input.clone();
    }
    if let Some(output) = &args.output {
        job.output = output.clone();
    }
    pipeline::run_gdp(&job, args.dry_run)
}

pub fn run_school(args: &SchoolArgs) -> Result<RunOutcome> {
    let mut job = SchoolJob::default();
    if let Some(input) = &args.input {
        job.input = input.clone();
    }
    if let Some(output) = &args.output {
        job.output = output.clone();
    }
    pipeline::run_school(&job, args.dry_run)
}
