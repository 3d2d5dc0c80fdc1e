//! Workbook ingestion for XLSX sources.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::numeric::format_numeric;
use crate::table::{CsvTable, normalize_cell};

/// Read the first worksheet of a workbook into a string-cell table.
///
/// The first row becomes the header. Cells stringify the way they display
/// in a spreadsheet, so integer-valued numeric cells carry no decimal
/// point.
pub fn read_workbook_table(path: &Path) -> Result<CsvTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;
    sheet_to_table(path, &range)
}

/// Convert a worksheet cell range into a header row plus data rows.
///
/// All-empty rows are dropped, matching the CSV reader.
pub fn sheet_to_table(path: &Path, range: &Range<Data>) -> Result<CsvTable> {
    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();
    let mut rows = Vec::new();
    for row in rows_iter {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        rows.push(cells);
    }
    Ok(CsvTable { headers, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => normalize_cell(value),
        Data::Float(value) => format_numeric(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => format_numeric(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => normalize_cell(value),
    }
}
