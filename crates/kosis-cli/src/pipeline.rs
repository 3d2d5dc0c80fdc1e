//! Reshape pipelines with explicit ingest, transform, and output stages.
//!
//! Each dataset runs the same three stages in order, every stage inside
//! its own `tracing` span with timing. A run aborts on the first stage
//! error, so nothing is written unless the whole table came out valid.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use kosis_ingest::{
    CsvTable, SourceEncoding, TwoHeaderTable, read_two_header_table, read_workbook_table,
};
use kosis_model::{GdpJob, RunReport, SchoolJob};
use kosis_output::{frame_to_csv_bytes, write_atomic, write_run_report};
use kosis_transform::{
    build_gdp_frame, build_school_frame, drop_aggregate_rows, flatten_headers, melt, pivot_first,
};

/// Dataset label for the regional GDP reshape.
pub const GDP_DATASET: &str = "regional_gdp";

/// Dataset label for the combined school projection.
pub const SCHOOL_DATASET: &str = "combined_school";

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Report payload describing the finished table.
    pub report: RunReport,
    /// Where the JSON report landed, `None` for dry runs.
    pub report_path: Option<PathBuf>,
    /// False when `--dry-run` suppressed all writes.
    pub written: bool,
}

/// Result of the GDP transform stage.
#[derive(Debug)]
pub struct GdpTransform {
    pub frame: DataFrame,
    pub aggregate_rows_dropped: usize,
    pub duplicates_dropped: usize,
    pub missing_by_column: BTreeMap<String, usize>,
}

/// Run the regional GDP reshape end to end.
pub fn run_gdp(job: &GdpJob, dry_run: bool) -> Result<RunOutcome> {
    let run_span = info_span!("gdp", input = %job.input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let table = ingest_gdp(job)?;
    let transform = transform_gdp(&table, job)?;
    let outcome = write_output(OutputRequest {
        dataset: GDP_DATASET,
        input: &job.input,
        output: &job.output,
        frame: transform.frame,
        missing_by_column: transform.missing_by_column,
        duplicates_dropped: transform.duplicates_dropped,
        dry_run,
    })?;

    info!(
        dataset = GDP_DATASET,
        rows = outcome.report.rows,
        duplicates_dropped = outcome.report.duplicates_dropped,
        duration_ms = run_start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(outcome)
}

/// Run the combined school projection end to end.
pub fn run_school(job: &SchoolJob, dry_run: bool) -> Result<RunOutcome> {
    let run_span = info_span!("school", input = %job.input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let table = ingest_school(job)?;
    let frame = transform_school(&table, job)?;
    let outcome = write_output(OutputRequest {
        dataset: SCHOOL_DATASET,
        input: &job.input,
        output: &job.output,
        frame,
        missing_by_column: BTreeMap::new(),
        duplicates_dropped: 0,
        dry_run,
    })?;

    info!(
        dataset = SCHOOL_DATASET,
        rows = outcome.report.rows,
        duration_ms = run_start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(outcome)
}

/// Read and decode the GDP source extract.
pub fn ingest_gdp(job: &GdpJob) -> Result<TwoHeaderTable> {
    let span = info_span!("ingest", source_file = %job.input.display());
    span.in_scope(|| {
        let start = Instant::now();
        let table = read_two_header_table(&job.input, SourceEncoding::Cp949, job.skip_rows)
            .with_context(|| format!("read {}", job.input.display()))?;
        debug!(
            columns = table.upper.len(),
            rows = table.rows.len(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(table)
    })
}

/// Flatten, filter, reshape, and type the GDP table.
pub fn transform_gdp(table: &TwoHeaderTable, job: &GdpJob) -> Result<GdpTransform> {
    let span = info_span!("transform", dataset = GDP_DATASET);
    span.in_scope(|| {
        let start = Instant::now();
        let mut flat = flatten_headers(table, &job.region_label)
            .with_context(|| format!("flatten header of {}", job.input.display()))?;
        let aggregate_rows_dropped = drop_aggregate_rows(&mut flat, &job.aggregate_label);
        let records = melt(&flat).with_context(|| format!("melt {}", job.input.display()))?;
        let pivot = pivot_first(&records);
        let built = build_gdp_frame(&pivot).context("build output table")?;
        debug!(
            rows = built.frame.height(),
            columns = built.frame.width(),
            aggregate_rows_dropped,
            duplicates_dropped = pivot.duplicates_dropped,
            duration_ms = start.elapsed().as_millis(),
            "transform complete"
        );
        Ok(GdpTransform {
            frame: built.frame,
            aggregate_rows_dropped,
            duplicates_dropped: pivot.duplicates_dropped,
            missing_by_column: built.missing_by_column,
        })
    })
}

/// Read the first worksheet of the school workbook.
pub fn ingest_school(job: &SchoolJob) -> Result<CsvTable> {
    let span = info_span!("ingest", source_file = %job.input.display());
    span.in_scope(|| {
        let start = Instant::now();
        let table = read_workbook_table(&job.input)
            .with_context(|| format!("read {}", job.input.display()))?;
        debug!(
            columns = table.headers.len(),
            rows = table.rows.len(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(table)
    })
}

/// Project and type the school table.
pub fn transform_school(table: &CsvTable, job: &SchoolJob) -> Result<DataFrame> {
    let span = info_span!("transform", dataset = SCHOOL_DATASET);
    span.in_scope(|| {
        let start = Instant::now();
        let frame = build_school_frame(table)
            .with_context(|| format!("project {}", job.input.display()))?;
        debug!(
            rows = frame.height(),
            columns = frame.width(),
            duration_ms = start.elapsed().as_millis(),
            "transform complete"
        );
        Ok(frame)
    })
}

/// Input to the shared output stage.
struct OutputRequest<'a> {
    dataset: &'static str,
    input: &'a Path,
    output: &'a Path,
    frame: DataFrame,
    missing_by_column: BTreeMap<String, usize>,
    duplicates_dropped: usize,
    dry_run: bool,
}

/// Serialize the finished table, then write the CSV and its run report.
fn write_output(request: OutputRequest<'_>) -> Result<RunOutcome> {
    let span = info_span!("output", output = %request.output.display());
    span.in_scope(|| {
        let start = Instant::now();
        let mut frame = request.frame;
        let report = RunReport {
            rows: frame.height(),
            columns: frame
                .get_column_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
            missing_by_column: request.missing_by_column,
            duplicates_dropped: request.duplicates_dropped,
            ..RunReport::new(
                request.dataset,
                request.input.to_path_buf(),
                request.output.to_path_buf(),
            )
        };
        let bytes = frame_to_csv_bytes(&mut frame)
            .with_context(|| format!("serialize {}", request.output.display()))?;
        if request.dry_run {
            info!(
                dataset = request.dataset,
                bytes = bytes.len(),
                duration_ms = start.elapsed().as_millis(),
                "output skipped (dry run)"
            );
            return Ok(RunOutcome {
                report,
                report_path: None,
                written: false,
            });
        }
        write_atomic(request.output, &bytes)
            .with_context(|| format!("write {}", request.output.display()))?;
        let report_path = write_run_report(&report).context("write run report")?;
        debug!(
            dataset = request.dataset,
            bytes = bytes.len(),
            report = %report_path.display(),
            duration_ms = start.elapsed().as_millis(),
            "output complete"
        );
        Ok(RunOutcome {
            report,
            report_path: Some(report_path),
            written: true,
        })
    })
}
