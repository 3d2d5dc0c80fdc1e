use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use kosis_cli::pipeline::RunOutcome;
use kosis_model::RunReport;

pub fn print_summary(outcome: &RunOutcome) {
    let report = &outcome.report;
    println!("Dataset: {}", report.dataset);
    println!("Input: {}", report.input.display());
    if outcome.written {
        println!("Output: {}", report.output.display());
    } else {
        println!("Output: skipped (dry run)");
    }
    if let Some(path) = &outcome.report_path {
        println!("Run report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Missing"),
        header_cell("Dups dropped"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(&report.dataset)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(report.rows),
        Cell::new(report.columns.len()),
        count_cell(report.missing_total(), Color::Yellow),
        count_cell(report.duplicates_dropped, Color::Yellow),
        output_cell(outcome),
    ]);
    println!("{table}");
    print_missing_table(report);
}

/// Per-column missing counts, shown only when something is missing.
fn print_missing_table(report: &RunReport) {
    let mut missing: Vec<(&String, usize)> = report
        .missing_by_column
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(name, count)| (name, *count))
        .collect();
    if missing.is_empty() {
        return;
    }
    // output column order reads better than map order
    missing.sort_by_key(|(name, _)| report.columns.iter().position(|column| column == *name));
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, count) in missing {
        table.add_row(vec![Cell::new(name), count_cell(count, Color::Yellow)]);
    }
    println!();
    println!("Missing values:");
    println!("{table}");
}

fn output_cell(outcome: &RunOutcome) -> Cell {
    if outcome.written {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell("dry run")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(100);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
