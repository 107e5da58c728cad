use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use coltab_cli::pipeline::MinDiffReport;
use coltab_cli::render::schema_rows;
use coltab_model::{Schema, Table as RecordTable};
use coltab_query::DiffMode;

pub fn print_records(table: &RecordTable) {
    let mut out = Table::new();
    out.set_header(table.schema.iter().map(|column| header_cell(&column.name)));
    apply_table_style(&mut out);
    for record in &table.records {
        out.add_row(record.values().map(|value| {
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
    }
    println!("{out}");
    println!("{} records, {} columns", table.records.len(), table.schema.len());
}

pub fn print_schema(schema: &Schema) {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Start"),
        header_cell("End"),
        header_cell("Synthetic"),
    ]);
    apply_table_style(&mut out);
    align_column(&mut out, 0, CellAlignment::Right);
    align_column(&mut out, 2, CellAlignment::Right);
    align_column(&mut out, 3, CellAlignment::Right);
    align_column(&mut out, 4, CellAlignment::Center);
    for (index, row) in schema_rows(schema).into_iter().enumerate() {
        let synthetic = if row.synthetic {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            dim_cell("-")
        };
        out.add_row(vec![
            Cell::new(index),
            Cell::new(row.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(row.start),
            Cell::new(row.end),
            synthetic,
        ]);
    }
    println!("{out}");
}

pub fn print_min_diff(report: &MinDiffReport) {
    let query = &report.query;
    let op = match query.mode {
        DiffMode::Signed => format!("{} - {}", query.minuend, query.subtrahend),
        DiffMode::Absolute => format!("|{} - {}|", query.minuend, query.subtrahend),
    };
    println!("File: {}", report.path.display());
    println!(
        "Smallest {op} across {} records: {} = {} (row {}, difference {})",
        report.records,
        query.select,
        report.outcome.value,
        report.outcome.row + 1,
        report.outcome.difference
    );
    println!("Time elapsed: {:.3} ms", report.elapsed.as_secs_f64() * 1000.0);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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
