//! CLI argument definitions for coltab.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use coltab_ingest::{DEFAULT_ID_PREFIX, ParseOptions};

#[derive(Parser)]
#[command(
    name = "coltab",
    version,
    about = "Recover tables from whitespace-aligned text reports",
    long_about = "Recover structured records from fixed-column text reports.\n\n\
                  Cells are matched to header labels by character position, so\n\
                  empty cells, stray separator tokens and unlabeled id columns\n\
                  are handled without a delimiter."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a report and print every record.
    Parse(ParseArgs),

    /// Print the detected columns and their character ranges.
    Schema(SchemaArgs),

    /// Find the row with the smallest difference between two columns.
    MinDiff(MinDiffArgs),
}

/// Options shared by every command that parses a report.
#[derive(Args)]
pub struct ParseFlags {
    /// Path to the report file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Name prefix for a synthesized id column.
    #[arg(long = "id-prefix", value_name = "PREFIX", default_value = DEFAULT_ID_PREFIX)]
    pub id_prefix: String,

    /// Align rows in parallel.
    #[arg(long = "parallel")]
    pub parallel: bool,
}

impl ParseFlags {
    pub fn options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_id_prefix(self.id_prefix.clone())
            .with_parallel(self.parallel)
    }
}

#[derive(Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: ParseFlags,

    /// Output format for the records.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: RecordFormatArg,
}

#[derive(Parser)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub input: ParseFlags,

    /// Output format for the schema.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: SchemaFormatArg,
}

#[derive(Parser)]
pub struct MinDiffArgs {
    #[command(flatten)]
    pub input: ParseFlags,

    /// Column subtracted from (e.g. MxT).
    #[arg(long = "minuend", value_name = "COLUMN")]
    pub minuend: String,

    /// Column subtracted (e.g. MnT).
    #[arg(long = "subtrahend", value_name = "COLUMN")]
    pub subtrahend: String,

    /// Column reported from the winning row (e.g. Dy).
    #[arg(long = "select", value_name = "COLUMN")]
    pub select: String,

    /// Compare absolute differences.
    #[arg(long = "abs")]
    pub abs: bool,

    /// Fail on a non-numeric operand cell instead of skipping the row.
    #[arg(long = "strict-numeric")]
    pub strict_numeric: bool,

    /// Output format for the result.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ResultFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordFormatArg {
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResultFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_min_diff_args() {
        let cli = Cli::try_parse_from([
            "coltab",
            "min-diff",
            "weather.dat",
            "--minuend",
            "MxT",
            "--subtrahend",
            "MnT",
            "--select",
            "Dy",
            "--abs",
        ])
        .unwrap();
        let Command::MinDiff(args) = cli.command else {
            panic!("expected min-diff");
        };
        assert_eq!(args.input.file, PathBuf::from("weather.dat"));
        assert_eq!(args.input.id_prefix, "ID-");
        assert!(args.abs);
        assert!(!args.strict_numeric);
    }
}
