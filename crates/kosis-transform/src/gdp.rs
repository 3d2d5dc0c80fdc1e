//! Final typed GDP table: indicator renames, column order, numeric coercion.

use std::collections::BTreeMap;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use kosis_ingest::parse_f64;
use kosis_model::{INDICATOR_RENAMES, REGION_COLUMN, YEAR_COLUMN, indicator_rename};

use crate::error::Result;
use crate::reshape::PivotedTable;

/// The typed GDP output table plus its per-column missing counts.
#[derive(Debug)]
pub struct GdpFrame {
    pub frame: DataFrame,
    /// Missing cells per renamed indicator column.
    pub missing_by_column: BTreeMap<String, usize>,
}

/// Build the output frame from a pivoted table.
///
/// Known indicators come first in vocabulary order, renamed to their
/// English names and coerced to floats; cells that fail to parse are
/// recorded as missing. Indicators outside the rename table follow in
/// first-seen order as raw text columns. Rows come out sorted by
/// `(region, year)`.
pub fn build_gdp_frame(pivot: &PivotedTable) -> Result<GdpFrame> {
    let known: Vec<(&String, &'static str)> = INDICATOR_RENAMES
        .iter()
        .filter_map(|(source, output)| {
            pivot
                .indicators
                .iter()
                .find(|name| name.as_str() == *source)
                .map(|name| (name, *output))
        })
        .collect();
    let passthrough: Vec<&String> = pivot
        .indicators
        .iter()
        .filter(|name| indicator_rename(name.as_str()).is_none())
        .collect();

    let regions: Vec<String> = pivot.cells.keys().map(|(region, _)| region.clone()).collect();
    let years: Vec<i64> = pivot.cells.keys().map(|(_, year)| *year).collect();

    let mut columns: Vec<Column> = Vec::with_capacity(known.len() + passthrough.len() + 2);
    columns.push(Series::new(REGION_COLUMN.into(), regions).into());
    columns.push(Series::new(YEAR_COLUMN.into(), years).into());

    let mut missing_by_column = BTreeMap::new();
    for (source, output) in known {
        let mut values: Vec<Option<f64>> = Vec::with_capacity(pivot.cells.len());
        let mut missing = 0usize;
        for row in pivot.cells.values() {
            let parsed = row.get(source).map(String::as_str).and_then(parse_f64);
            if parsed.is_none() {
                missing += 1;
            }
            values.push(parsed);
        }
        missing_by_column.insert(output.to_string(), missing);
        columns.push(Series::new(output.into(), values).into());
    }
    for name in passthrough {
        let values: Vec<String> = pivot
            .cells
            .values()
            .map(|row| row.get(name).cloned().unwrap_or_default())
            .collect();
        columns.push(Series::new(name.as_str().into(), values).into());
    }

    let frame = DataFrame::new(columns)?;
    Ok(GdpFrame {
        frame,
        missing_by_column,
    })
}
