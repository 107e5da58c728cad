//! Loading reports and running queries, with failures tagged by stage.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use coltab_ingest::{IngestError, ParseOptions, read_table};
use coltab_model::Table;
use coltab_query::{MinDiffOutcome, MinDiffQuery};
use tracing::{info, info_span};

/// Result of a min-diff run, ready for display.
#[derive(Debug)]
pub struct MinDiffReport {
    pub path: PathBuf,
    pub query: MinDiffQuery,
    pub outcome: MinDiffOutcome,
    pub records: usize,
    pub elapsed: Duration,
}

fn ingest_stage(error: &IngestError) -> &'static str {
    match error {
        IngestError::FileRead { .. } => "read input",
        IngestError::Format(_) => "schema detection",
    }
}

/// Reads and parses a report, naming the failed stage on error.
pub fn load_table(path: &Path, options: &ParseOptions) -> Result<Table> {
    read_table(path, options).map_err(|error| {
        let stage = ingest_stage(&error);
        anyhow::Error::new(error).context(format!("{stage} failed for {}", path.display()))
    })
}

/// Parses a report and runs a minimum-difference query over it.
pub fn run_min_diff(
    path: &Path,
    options: &ParseOptions,
    query: MinDiffQuery,
) -> Result<MinDiffReport> {
    let span = info_span!("min_diff", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = load_table(path, options)?;
    let outcome = query
        .run(&table)
        .with_context(|| format!("numeric query failed for {}", path.display()))?;
    let elapsed = start.elapsed();
    info!(
        row = outcome.row,
        value = %outcome.value,
        difference = outcome.difference,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "min-diff query complete"
    );

    Ok(MinDiffReport {
        path: path.to_path_buf(),
        query,
        outcome,
        records: table.records.len(),
        elapsed,
    })
}
