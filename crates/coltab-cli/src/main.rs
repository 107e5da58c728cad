//! coltab command-line interface.

use clap::{ColorChoice, Parser};
use coltab_cli::logging::{LogConfig, LogFormat, init_logging};
use coltab_cli::render::min_diff_json;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ResultFormatArg};
use crate::commands::{run_parse, run_query, run_schema};
use crate::summary::print_min_diff;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Schema(args) => run_schema(args),
        Command::MinDiff(args) => run_query(args).and_then(|report| match args.format {
            ResultFormatArg::Text => {
                print_min_diff(&report);
                Ok(())
            }
            ResultFormatArg::Json => {
                println!("{}", min_diff_json(&report)?);
                Ok(())
            }
        }),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_timestamps(cli.log_timestamps)
        .with_ansi(ansi)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_for(args: &[&str]) -> LogConfig {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        log_config_from_cli(&cli)
    }

    #[test]
    fn test_defaults_defer_to_env() {
        let config = config_for(&["coltab", "schema", "report.dat"]);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_timestamps);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_log_flags_reach_config() {
        let config = config_for(&[
            "coltab",
            "schema",
            "report.dat",
            "-v",
            "--log-level",
            "trace",
            "--log-format",
            "json",
            "--log-timestamps",
            "--log-file",
            "coltab.log",
            "--color",
            "never",
        ]);
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert!(!config.use_env_filter);
        assert!(config.with_timestamps);
        assert!(!config.with_ansi);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("coltab.log")));
    }

    #[test]
    fn test_verbosity_sets_level() {
        let config = config_for(&["coltab", "-vv", "schema", "report.dat"]);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }
}
