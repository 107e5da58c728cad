//! Machine-readable renderings of tables and schemas.

use anyhow::{Context, Result};
use coltab_model::{Schema, Table};
use coltab_query::{DiffMode, NonNumericPolicy};
use serde::Serialize;

use crate::pipeline::MinDiffReport;

/// One schema column as shown by the `schema` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRow {
    pub name: String,
    pub start: usize,
    pub end: usize,
    pub synthetic: bool,
}

pub fn schema_rows(schema: &Schema) -> Vec<SchemaRow> {
    schema
        .iter()
        .enumerate()
        .map(|(index, column)| SchemaRow {
            name: column.name.clone(),
            start: column.span.start,
            end: column.span.end,
            synthetic: schema.is_synthetic(index),
        })
        .collect()
}

/// Renders records as CSV with a header line.
pub fn records_csv(table: &Table) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(table.schema.names())
        .context("write csv header")?;
    for record in &table.records {
        writer.write_record(record.values()).context("write csv row")?;
    }
    let bytes = writer.into_inner().context("flush csv")?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}

/// Renders the table as pretty JSON.
pub fn records_json(table: &Table) -> Result<String> {
    serde_json::to_string_pretty(table).context("serialize records")
}

/// Renders the schema as pretty JSON.
pub fn schema_json(schema: &Schema) -> Result<String> {
    serde_json::to_string_pretty(&schema_rows(schema)).context("serialize schema")
}

#[derive(Serialize)]
struct MinDiffView<'a> {
    file: String,
    minuend: &'a str,
    subtrahend: &'a str,
    select: &'a str,
    mode: DiffMode,
    non_numeric: NonNumericPolicy,
    row: usize,
    difference: f64,
    value: &'a str,
    records: usize,
    elapsed_ms: f64,
}

/// Renders a min-diff result as pretty JSON.
pub fn min_diff_json(report: &MinDiffReport) -> Result<String> {
    let view = MinDiffView {
        file: report.path.display().to_string(),
        minuend: &report.query.minuend,
        subtrahend: &report.query.subtrahend,
        select: &report.query.select,
        mode: report.query.mode,
        non_numeric: report.query.non_numeric,
        row: report.outcome.row,
        difference: report.outcome.difference,
        value: &report.outcome.value,
        records: report.records,
        elapsed_ms: report.elapsed.as_secs_f64() * 1000.0,
    };
    serde_json::to_string_pretty(&view).context("serialize min-diff result")
}
