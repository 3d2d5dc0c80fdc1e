//! Tests for the GDP reshape chain: flatten, filter, melt, pivot, build.

use proptest::prelude::*;

use kosis_ingest::{CsvTable, TwoHeaderTable};
use kosis_transform::{
    TransformError, build_gdp_frame, drop_aggregate_rows, flatten_headers, melt, pivot_first,
    year_digits,
};

fn two_header(upper: &[&str], lower: &[&str], rows: &[&[&str]]) -> TwoHeaderTable {
    TwoHeaderTable {
        upper: upper.iter().map(|cell| cell.to_string()).collect(),
        lower: lower.iter().map(|cell| cell.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    }
}

/// Two regions, two years, two indicators, with a provisional-year
/// annotation on the second year.
fn scenario_table() -> TwoHeaderTable {
    two_header(
        &["시도별", "2022", "2022", "2023 p)", "2023 p)"],
        &[
            "",
            "1인당 지역내총생산",
            "1인당 지역총소득",
            "1인당 지역내총생산",
            "1인당 지역총소득",
        ],
        &[
            &["전국", "300", "310", "305", "315"],
            &["서울", "100", "110", "105", "115"],
            &["부산", "90", "-", "95", "96"],
        ],
    )
}

#[test]
fn test_year_digits_strips_annotations() {
    assert_eq!(year_digits("2022"), "2022");
    assert_eq!(year_digits("2023 p)"), "2023");
    assert_eq!(year_digits(" 2024p) "), "2024");
    assert_eq!(year_digits("p)"), "");
}

#[test]
fn test_flatten_joins_year_digits_and_indicator() {
    let flat = flatten_headers(&scenario_table(), "시도별").unwrap();
    assert_eq!(
        flat.headers,
        vec![
            "시도별",
            "2022_1인당 지역내총생산",
            "2022_1인당 지역총소득",
            "2023_1인당 지역내총생산",
            "2023_1인당 지역총소득",
        ]
    );
    assert_eq!(flat.rows.len(), 3);
}

#[test]
fn test_flatten_rejects_wrong_region_label() {
    let table = two_header(&["지역", "2022"], &["", "x"], &[]);
    let result = flatten_headers(&table, "시도별");
    assert!(matches!(
        result,
        Err(TransformError::RegionColumnMismatch { .. })
    ));
}

#[test]
fn test_flatten_rejects_year_without_digits() {
    let table = two_header(&["시도별", "p)"], &["", "x"], &[]);
    let result = flatten_headers(&table, "시도별");
    assert!(matches!(
        result,
        Err(TransformError::BlankYearHeader { column: 1, .. })
    ));
}

#[test]
fn test_flatten_rejects_colliding_columns() {
    // "2023" and "2023 p)" reduce to the same digits
    let table = two_header(&["시도별", "2023", "2023 p)"], &["", "x", "x"], &[]);
    let result = flatten_headers(&table, "시도별");
    match result {
        Err(TransformError::HeaderCollision { name, first, second }) => {
            assert_eq!(name, "2023_x");
            assert_eq!(first, 1);
            assert_eq!(second, 2);
        }
        other => panic!("expected HeaderCollision, got {other:?}"),
    }
}

#[test]
fn test_drop_aggregate_rows_removes_nationwide() {
    let mut flat = flatten_headers(&scenario_table(), "시도별").unwrap();
    let dropped = drop_aggregate_rows(&mut flat, "전국");
    assert_eq!(dropped, 1);
    assert_eq!(flat.rows.len(), 2);
    assert!(flat.rows.iter().all(|row| row[0] != "전국"));
}

#[test]
fn test_drop_aggregate_rows_is_noop_without_label() {
    let mut table = CsvTable {
        headers: vec!["시도별".to_string(), "2022_x".to_string()],
        rows: vec![vec!["서울".to_string(), "1".to_string()]],
    };
    assert_eq!(drop_aggregate_rows(&mut table, "전국"), 0);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn test_melt_walks_columns_before_rows() {
    let table = CsvTable {
        headers: vec!["시도별".to_string(), "2022_a".to_string(), "2023_a".to_string()],
        rows: vec![
            vec!["서울".to_string(), "1".to_string(), "2".to_string()],
            vec!["부산".to_string(), "3".to_string(), "4".to_string()],
        ],
    };
    let records = melt(&table).unwrap();
    assert_eq!(records.len(), 4);
    // first column top to bottom, then the next column
    assert_eq!((records[0].region.as_str(), records[0].year), ("서울", 2022));
    assert_eq!((records[1].region.as_str(), records[1].year), ("부산", 2022));
    assert_eq!((records[2].region.as_str(), records[2].year), ("서울", 2023));
    assert_eq!((records[3].region.as_str(), records[3].year), ("부산", 2023));
}

#[test]
fn test_melt_splits_on_first_underscore_only() {
    let table = CsvTable {
        headers: vec!["시도별".to_string(), "2022_per_capita_gdp".to_string()],
        rows: vec![vec!["서울".to_string(), "1".to_string()]],
    };
    let records = melt(&table).unwrap();
    assert_eq!(records[0].indicator, "per_capita_gdp");
    assert_eq!(records[0].year, 2022);
}

#[test]
fn test_melt_rejects_key_without_separator() {
    let table = CsvTable {
        headers: vec!["시도별".to_string(), "2022a".to_string()],
        rows: vec![],
    };
    assert!(matches!(
        melt(&table),
        Err(TransformError::MissingYearSeparator { .. })
    ));
}

#[test]
fn test_melt_rejects_non_integer_year() {
    let table = CsvTable {
        headers: vec!["시도별".to_string(), "20x2_a".to_string()],
        rows: vec![],
    };
    assert!(matches!(
        melt(&table),
        Err(TransformError::YearNotInteger { .. })
    ));
}

#[test]
fn test_pivot_keeps_first_value_for_duplicate_keys() {
    let table = CsvTable {
        headers: vec!["시도별".to_string(), "2022_a".to_string()],
        rows: vec![
            vec!["서울".to_string(), "1".to_string()],
            vec!["서울".to_string(), "999".to_string()],
        ],
    };
    let pivot = pivot_first(&melt(&table).unwrap());
    assert_eq!(pivot.duplicates_dropped, 1);
    let row = &pivot.cells[&("서울".to_string(), 2022)];
    assert_eq!(row["a"], "1");
}

#[test]
fn test_pivot_blank_first_value_still_wins() {
    let table = CsvTable {
        headers: vec!["시도별".to_string(), "2022_a".to_string()],
        rows: vec![
            vec!["서울".to_string(), String::new()],
            vec!["서울".to_string(), "7".to_string()],
        ],
    };
    let pivot = pivot_first(&melt(&table).unwrap());
    assert_eq!(pivot.duplicates_dropped, 1);
    assert_eq!(pivot.cells[&("서울".to_string(), 2022)]["a"], "");
}

#[test]
fn test_full_chain_produces_sorted_typed_frame() {
    let mut flat = flatten_headers(&scenario_table(), "시도별").unwrap();
    drop_aggregate_rows(&mut flat, "전국");
    let pivot = pivot_first(&melt(&flat).unwrap());
    let built = build_gdp_frame(&pivot).unwrap();

    let names: Vec<String> = built
        .frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["region", "year", "gdp_per_capita", "gni_per_capita"]);

    // rows sorted by region, then year; 부산 < 서울 in code point order
    assert_eq!(built.frame.height(), 4);
    let region = built.frame.column("region").unwrap().str().unwrap();
    let year = built.frame.column("year").unwrap().i64().unwrap();
    assert_eq!(region.get(0), Some("부산"));
    assert_eq!(year.get(0), Some(2022));
    assert_eq!(region.get(1), Some("부산"));
    assert_eq!(year.get(1), Some(2023));
    assert_eq!(region.get(2), Some("서울"));

    let gdp = built.frame.column("gdp_per_capita").unwrap().f64().unwrap();
    assert_eq!(gdp.get(0), Some(90.0));
    assert_eq!(gdp.get(2), Some(100.0));

    // "-" fails numeric coercion and lands as missing
    let gni = built.frame.column("gni_per_capita").unwrap().f64().unwrap();
    assert_eq!(gni.get(0), None);
    assert_eq!(built.missing_by_column["gni_per_capita"], 1);
    assert_eq!(built.missing_by_column["gdp_per_capita"], 0);
}

#[test]
fn test_single_region_splits_into_one_row_per_year() {
    let table = two_header(
        &["시도별", "2022", "2022", "2023 p)", "2023 p)"],
        &[
            "",
            "1인당 지역내총생산",
            "1인당 지역총소득",
            "1인당 지역내총생산",
            "1인당 지역총소득",
        ],
        &[&["서울", "100", "110", "105", "115"]],
    );
    let flat = flatten_headers(&table, "시도별").unwrap();
    let pivot = pivot_first(&melt(&flat).unwrap());
    let built = build_gdp_frame(&pivot).unwrap();

    assert_eq!(built.frame.height(), 2);
    let region = built.frame.column("region").unwrap().str().unwrap();
    let year = built.frame.column("year").unwrap().i64().unwrap();
    let gdp = built.frame.column("gdp_per_capita").unwrap().f64().unwrap();
    let gni = built.frame.column("gni_per_capita").unwrap().f64().unwrap();
    assert_eq!(
        (region.get(0), year.get(0), gdp.get(0), gni.get(0)),
        (Some("서울"), Some(2022), Some(100.0), Some(110.0))
    );
    assert_eq!(
        (region.get(1), year.get(1), gdp.get(1), gni.get(1)),
        (Some("서울"), Some(2023), Some(105.0), Some(115.0))
    );
}

#[test]
fn test_unknown_indicator_passes_through_as_text() {
    let table = two_header(
        &["시도별", "2022", "2022"],
        &["", "1인당 지역내총생산", "신규지표"],
        &[&["서울", "100", "비공개"]],
    );
    let flat = flatten_headers(&table, "시도별").unwrap();
    let pivot = pivot_first(&melt(&flat).unwrap());
    let built = build_gdp_frame(&pivot).unwrap();

    let names: Vec<String> = built
        .frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["region", "year", "gdp_per_capita", "신규지표"]);

    // passthrough keeps the raw text and contributes no missing count
    let extra = built.frame.column("신규지표").unwrap().str().unwrap();
    assert_eq!(extra.get(0), Some("비공개"));
    assert!(!built.missing_by_column.contains_key("신규지표"));
}

#[test]
fn test_row_count_is_regions_times_years() {
    // every region row carries a cell for every year column, so the pivot
    // key set is the full cross product even when cells are blank
    let table = two_header(
        &["시도별", "2021", "2022", "2023"],
        &["", "1인당 개인소득", "1인당 개인소득", "1인당 개인소득"],
        &[
            &["서울", "1", "", "3"],
            &["부산", "4", "5", ""],
            &["대구", "", "8", "9"],
        ],
    );
    let flat = flatten_headers(&table, "시도별").unwrap();
    let pivot = pivot_first(&melt(&flat).unwrap());
    let built = build_gdp_frame(&pivot).unwrap();
    assert_eq!(built.frame.height(), 9);
    assert_eq!(built.missing_by_column["personal_income_per_capita"], 3);
}

#[test]
fn test_empty_data_rows_build_an_empty_frame() {
    let table = two_header(&["시도별", "2022"], &["", "1인당 민간소비"], &[]);
    let flat = flatten_headers(&table, "시도별").unwrap();
    let pivot = pivot_first(&melt(&flat).unwrap());
    let built = build_gdp_frame(&pivot).unwrap();
    assert_eq!(built.frame.height(), 0);
    assert_eq!(built.frame.width(), 2);
}

proptest! {
    /// Flattened names collide exactly when the year digits match, no
    /// matter what non-digit annotation the year token carries.
    #[test]
    fn flattened_names_distinct_across_years(
        year_a in 1900u32..2100,
        year_b in 1900u32..2100,
        annotation_a in "[ a-z)]{0,3}",
        annotation_b in "[ a-z)]{0,3}",
        indicator in "[a-z]{1,8}",
    ) {
        let name_a = format!("{}_{indicator}", year_digits(&format!("{year_a}{annotation_a}")));
        let name_b = format!("{}_{indicator}", year_digits(&format!("{year_b}{annotation_b}")));
        prop_assert_eq!(name_a == name_b, year_a == year_b);
    }
}
