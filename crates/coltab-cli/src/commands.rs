use anyhow::Result;
use coltab_query::{DiffMode, MinDiffQuery, NonNumericPolicy};

use coltab_cli::pipeline::{MinDiffReport, load_table, run_min_diff};
use coltab_cli::render::{records_csv, records_json, schema_json};

use crate::cli::{MinDiffArgs, ParseArgs, RecordFormatArg, SchemaArgs, SchemaFormatArg};
use crate::summary::{print_records, print_schema};

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let table = load_table(&args.input.file, &args.input.options())?;
    match args.format {
        RecordFormatArg::Table => print_records(&table),
        RecordFormatArg::Csv => print!("{}", records_csv(&table)?),
        RecordFormatArg::Json => println!("{}", records_json(&table)?),
    }
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let table = load_table(&args.input.file, &args.input.options())?;
    match args.format {
        SchemaFormatArg::Table => print_schema(&table.schema),
        SchemaFormatArg::Json => println!("{}", schema_json(&table.schema)?),
    }
    Ok(())
}

pub fn run_query(args: &MinDiffArgs) -> Result<MinDiffReport> {
    let query = MinDiffQuery::new(&args.minuend, &args.subtrahend, &args.select)
        .with_mode(if args.abs {
            DiffMode::Absolute
        } else {
            DiffMode::Signed
        })
        .with_non_numeric(if args.strict_numeric {
            NonNumericPolicy::Error
        } else {
            NonNumericPolicy::Skip
        });
    run_min_diff(&args.input.file, &args.input.options(), query)
}
