//! Aggregate-row filtering, melt, and first-wins pivot for the GDP table.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::{debug, warn};

use kosis_ingest::CsvTable;

use crate::error::{Result, TransformError};

/// One melted observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRecord {
    pub region: String,
    pub year: i64,
    pub indicator: String,
    /// Raw cell text; numeric coercion happens later, per indicator.
    pub value: String,
}

/// Remove rows whose region cell equals the aggregate label.
///
/// Returns the number of rows removed. A table without the label is left
/// untouched.
pub fn drop_aggregate_rows(table: &mut CsvTable, aggregate_label: &str) -> usize {
    let before = table.rows.len();
    table
        .rows
        .retain(|row| row.first().map(String::as_str) != Some(aggregate_label));
    before - table.rows.len()
}

/// Melt every non-region column into long records, column by column.
///
/// Combined keys split on the first underscore only, since indicator names
/// may themselves contain underscores. The year side must parse as an
/// integer.
pub fn melt(table: &CsvTable) -> Result<Vec<LongRecord>> {
    let mut records = Vec::with_capacity(table.rows.len() * table.headers.len().saturating_sub(1));
    for (col_idx, header) in table.headers.iter().enumerate().skip(1) {
        let Some((year_token, indicator)) = header.split_once('_') else {
            return Err(TransformError::MissingYearSeparator {
                key: header.clone(),
            });
        };
        let year: i64 = year_token
            .trim()
            .parse()
            .map_err(|_| TransformError::YearNotInteger {
                key: header.clone(),
                token: year_token.to_string(),
            })?;
        for row in &table.rows {
            records.push(LongRecord {
                region: row.first().cloned().unwrap_or_default(),
                year,
                indicator: indicator.to_string(),
                value: row.get(col_idx).cloned().unwrap_or_default(),
            });
        }
    }
    Ok(records)
}

/// Long records pivoted back to one row per `(region, year)`.
#[derive(Debug, Default)]
pub struct PivotedTable {
    /// Indicator names in first-seen order.
    pub indicators: Vec<String>,
    /// Cell text keyed by `(region, year)`, then by indicator.
    pub cells: BTreeMap<(String, i64), BTreeMap<String, String>>,
    /// Observations discarded because their key was already filled.
    pub duplicates_dropped: usize,
}

/// Pivot long records into wide form, keeping the first value seen for any
/// duplicate `(region, year, indicator)` key.
///
/// A blank first value still counts as seen; later values never replace it.
pub fn pivot_first(records: &[LongRecord]) -> PivotedTable {
    let mut pivot = PivotedTable::default();
    for record in records {
        if !pivot.indicators.iter().any(|name| name == &record.indicator) {
            pivot.indicators.push(record.indicator.clone());
        }
        let row = pivot
            .cells
            .entry((record.region.clone(), record.year))
            .or_default();
        match row.entry(record.indicator.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(record.value.clone());
            }
            Entry::Occupied(entry) => {
                debug!(
                    region = %record.region,
                    year = record.year,
                    indicator = %record.indicator,
                    kept = %entry.get(),
                    dropped = %record.value,
                    "duplicate observation dropped"
                );
                pivot.duplicates_dropped += 1;
            }
        }
    }
    if pivot.duplicates_dropped > 0 {
        warn!(
            duplicates_dropped = pivot.duplicates_dropped,
            "kept first value for duplicate (region, year, indicator) keys"
        );
    }
    pivot
}
