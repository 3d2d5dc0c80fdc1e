/// Header label of the region column in KOSIS regional account extracts.
pub const REGION_LABEL: &str = "시도별";

/// Region label of the nationwide aggregate row.
pub const NATIONWIDE_LABEL: &str = "전국";

/// Output name of the region column.
pub const REGION_COLUMN: &str = "region";

/// Output name of the year column.
pub const YEAR_COLUMN: &str = "year";

/// Per-capita indicator renames, in output column order.
///
/// Indicators outside this table pass through under their source name,
/// after the renamed columns.
pub const INDICATOR_RENAMES: [(&str, &str); 4] = [
    ("1인당 지역내총생산", "gdp_per_capita"),
    ("1인당 지역총소득", "gni_per_capita"),
    ("1인당 개인소득", "personal_income_per_capita"),
    ("1인당 민간소비", "private_consumption_per_capita"),
];

/// Output name for a known indicator, `None` for passthrough indicators.
pub fn indicator_rename(name: &str) -> Option<&'static str> {
    INDICATOR_RENAMES
        .iter()
        .find(|(source, _)| *source == name)
        .map(|(_, output)| *output)
}
