//! Cell parsing and formatting helpers shared across the pipeline.

/// Parses a string cell as a float, treating blanks as missing.
pub fn parse_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parses a string cell as an integer, treating blanks as missing.
pub fn parse_i64(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Formats a float the way it would appear in a spreadsheet cell.
///
/// Integer-valued floats come out without a decimal point, so workbook
/// counts like `350.0` read back as `350`.
pub fn format_numeric(value: f64) -> String {
    let formatted = format!("{value}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
