use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vaya_cli::types::{FileReport, RunReport};

/// Prints the sheets written for a single file.
pub fn print_file_report(report: &FileReport) {
    if let Some(path) = &report.output {
        println!("Output: {}", path.display());
    }
    if report.sheets.is_empty() {
        println!("Rows: {}", report.rows);
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Catalog type"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in &report.sheets {
        table.add_row(vec![
            Cell::new(&sheet.name),
            type_cell(&sheet.catalog_type.to_string()),
            Cell::new(sheet.rows),
        ]);
    }
    println!("{table}");
}

/// Prints one row per file plus totals for batch and workflow runs.
pub fn print_run_report(report: &RunReport) {
    println!("Output: {}", report.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Stage"),
        header_cell("Types"),
        header_cell("Sheets"),
        header_cell("Rows"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    let mut total_rows = 0usize;
    for file in &report.files {
        total_rows += file.rows;
        table.add_row(vec![
            Cell::new(file.file_name()),
            dim_cell(file.stage),
            types_cell(file),
            count_cell(file.sheets.len()),
            count_cell(file.rows),
            status_cell(file.is_success()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(format!("{}/{}", report.succeeded(), report.files.len()))
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let failures: Vec<&FileReport> = report.files.iter().filter(|f| !f.is_success()).collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for file in failures {
            eprintln!(
                "- {}: {}",
                file.file_name(),
                file.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(label: &str) -> Cell {
    if label == "UNKNOWN" {
        Cell::new(label).fg(Color::Yellow)
    } else {
        Cell::new(label)
    }
}

fn types_cell(file: &FileReport) -> Cell {
    let mut types: Vec<String> = file
        .sheets
        .iter()
        .map(|sheet| sheet.catalog_type.to_string())
        .collect();
    types.dedup();
    if types.is_empty() {
        dim_cell("-")
    } else {
        type_cell(&types.join(", "))
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn status_cell(success: bool) -> Cell {
    if success {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
