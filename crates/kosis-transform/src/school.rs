//! Column projection and typing for the combined school table.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use kosis_ingest::{CsvTable, parse_i64};
use kosis_model::{FieldKind, SCHOOL_FIELDS};

use crate::error::{Result, TransformError};

/// Project the declared school columns, rename them, and apply their types.
///
/// Every declared source column must be present; extra source columns are
/// dropped. Count columns parse as 16-bit integers, and any count cell
/// that is blank, fractional, or out of range aborts the build.
pub fn build_school_frame(table: &CsvTable) -> Result<DataFrame> {
    let mut indices = Vec::with_capacity(SCHOOL_FIELDS.len());
    for field in &SCHOOL_FIELDS {
        let index = table
            .headers
            .iter()
            .position(|header| header == field.source)
            .ok_or_else(|| TransformError::MissingColumn {
                column: field.source.to_string(),
            })?;
        indices.push(index);
    }

    let mut columns: Vec<Column> = Vec::with_capacity(SCHOOL_FIELDS.len());
    for (field, &index) in SCHOOL_FIELDS.iter().zip(&indices) {
        let column = match field.kind {
            FieldKind::Category | FieldKind::Text => {
                let values: Vec<String> = table
                    .rows
                    .iter()
                    .map(|row| row.get(index).cloned().unwrap_or_default())
                    .collect();
                Series::new(field.output.into(), values).into()
            }
            FieldKind::Count => {
                let mut values: Vec<i16> = Vec::with_capacity(table.rows.len());
                for (row_idx, row) in table.rows.iter().enumerate() {
                    let cell = row.get(index).map(String::as_str).unwrap_or("");
                    values.push(parse_count(field.output, row_idx + 1, cell)?);
                }
                Series::new(field.output.into(), values).into()
            }
        };
        columns.push(column);
    }

    let frame = DataFrame::new(columns)?;
    Ok(frame)
}

fn parse_count(column: &str, row: usize, cell: &str) -> Result<i16> {
    let Some(value) = parse_i64(cell) else {
        return Err(TransformError::CountNotInteger {
            column: column.to_string(),
            row,
            value: cell.to_string(),
        });
    };
    i16::try_from(value).map_err(|_| TransformError::CountOutOfRange {
        column: column.to_string(),
        row,
        value,
    })
}
