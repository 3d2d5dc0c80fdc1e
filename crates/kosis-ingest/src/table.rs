//! CSV parsing into trimmed string-cell tables.

use std::path::Path;

use csv::ReaderBuilder;

use crate::encoding::{SourceEncoding, decode_bytes};
use crate::error::{IngestError, Result};

/// A CSV parsed into trimmed string cells under a single header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    /// Data rows, each padded or truncated to the header width.
    pub rows: Vec<Vec<String>>,
}

/// A CSV parsed under a two-row column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoHeaderTable {
    /// First header row: year tokens in KOSIS extracts.
    pub upper: Vec<String>,
    /// Second header row: indicator names.
    pub lower: Vec<String>,
    /// Data rows, each shaped to the upper header width.
    pub rows: Vec<Vec<String>>,
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn shape_row(row: &[String], width: usize) -> Vec<String> {
    (0..width)
        .map(|idx| row.get(idx).cloned().unwrap_or_default())
        .collect()
}

/// Reads, decodes, and parses every non-empty CSV record.
fn read_records(path: &Path, encoding: SourceEncoding) -> Result<Vec<Vec<String>>> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let text = decode_bytes(path, &bytes, encoding)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        records.push(row);
    }
    Ok(records)
}

/// Read a CSV whose first non-empty row is the header.
pub fn read_csv_table(path: &Path, encoding: SourceEncoding) -> Result<CsvTable> {
    let mut records = read_records(path, encoding)?;
    if records.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let headers = records.remove(0);
    let width = headers.len();
    let rows = records.iter().map(|row| shape_row(row, width)).collect();
    Ok(CsvTable { headers, rows })
}

/// Read a CSV whose column header spans two rows, discarding `skip_rows`
/// leading rows first.
///
/// KOSIS regional extracts open with a vestigial `Column1,Column2,...` row
/// ahead of the real year/indicator header pair.
pub fn read_two_header_table(
    path: &Path,
    encoding: SourceEncoding,
    skip_rows: usize,
) -> Result<TwoHeaderTable> {
    let records = read_records(path, encoding)?;
    let mut remaining = records.into_iter().skip(skip_rows);
    let Some(upper) = remaining.next() else {
        return Err(IngestError::MissingHeaderRows {
            path: path.to_path_buf(),
            expected: 2,
            found: 0,
        });
    };
    let Some(lower) = remaining.next() else {
        return Err(IngestError::MissingHeaderRows {
            path: path.to_path_buf(),
            expected: 2,
            found: 1,
        });
    };
    let width = upper.len();
    let lower = shape_row(&lower, width);
    let rows = remaining.map(|row| shape_row(&row, width)).collect();
    Ok(TwoHeaderTable { upper, lower, rows })
}
