//! Two-row header flattening for KOSIS wide extracts.

use std::collections::BTreeMap;

use kosis_ingest::{CsvTable, TwoHeaderTable};

use crate::error::{Result, TransformError};

/// Reduce a year header token to its digits.
///
/// KOSIS marks provisional years with annotations like `2023 p)`; only the
/// digits identify the year.
pub fn year_digits(token: &str) -> String {
    token.chars().filter(char::is_ascii_digit).collect()
}

/// Collapse a two-row header into single `{year}_{indicator}` column names.
///
/// The leading region column keeps its label. Every other column joins the
/// digits of its year token with its indicator name. Two source columns
/// flattening to the same name is an error, as is a year token with no
/// digits at all.
pub fn flatten_headers(table: &TwoHeaderTable, region_label: &str) -> Result<CsvTable> {
    let first = table.upper.first().map(String::as_str).unwrap_or("");
    if first != region_label {
        return Err(TransformError::RegionColumnMismatch {
            expected: region_label.to_string(),
            found: first.to_string(),
        });
    }
    let mut headers = Vec::with_capacity(table.upper.len());
    headers.push(first.to_string());
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for (idx, token) in table.upper.iter().enumerate().skip(1) {
        let year = year_digits(token);
        if year.is_empty() {
            return Err(TransformError::BlankYearHeader {
                column: idx,
                token: token.clone(),
            });
        }
        let indicator = table.lower.get(idx).map(String::as_str).unwrap_or("");
        let name = format!("{year}_{indicator}");
        if let Some(&first_idx) = seen.get(&name) {
            return Err(TransformError::HeaderCollision {
                name,
                first: first_idx,
                second: idx,
            });
        }
        seen.insert(name.clone(), idx);
        headers.push(name);
    }
    Ok(CsvTable {
        headers,
        rows: table.rows.clone(),
    })
}
