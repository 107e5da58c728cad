//! Parsing whole reports into tables.

use std::path::Path;

use coltab_model::{Record, Table};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::align::align;
use crate::error::{IngestError, Result};
use crate::options::ParseOptions;
use crate::schema::detect_schema;
use crate::tokenize::is_data_line;

/// Parses the lines of a report.
///
/// The schema is detected once; every line starting with a digit then
/// becomes one record, in input order. Other lines (preamble, separators,
/// footers) produce nothing.
pub fn parse_lines<S>(lines: &[S], options: &ParseOptions) -> Result<Table>
where
    S: AsRef<str>,
{
    let schema = detect_schema(lines, options)?;
    let rows: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| is_data_line(line))
        .collect();
    debug!(rows = rows.len(), parallel = options.parallel, "aligning data rows");

    let records: Vec<Record> = if options.parallel {
        rows.par_iter().map(|row| align(&schema, row)).collect()
    } else {
        rows.iter().map(|row| align(&schema, row)).collect()
    };
    Ok(Table { schema, records })
}

/// Parses report text held in memory.
pub fn parse_str(text: &str, options: &ParseOptions) -> Result<Table> {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines, options)
}

/// Reads and parses a report file.
pub fn read_table(path: &Path, options: &ParseOptions) -> Result<Table> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_str(&text, options)?;
    info!(
        path = %path.display(),
        columns = table.schema.len(),
        rows = table.records.len(),
        "parsed report"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    const REPORT: &str = "Monthly summary\n\n Dy MxT MnT\n\n  1  88  59\n  2  90\n  ----------\n  mo 89  59\n";

    #[test]
    fn test_parse_str_skips_non_data_lines() {
        let table = parse_str(REPORT, &ParseOptions::default()).unwrap();
        assert_eq!(table.schema.names().collect::<Vec<_>>(), vec!["Dy", "MxT", "MnT"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].get("MnT"), Some("59"));
        assert_eq!(table.records[1].get("MxT"), Some("90"));
        assert_eq!(table.records[1].get("MnT"), Some(""));
    }

    #[test]
    fn test_parse_str_handles_crlf() {
        let text = "A B\r\n1 2\r\n3 4\r\n";
        let table = parse_str(text, &ParseOptions::default()).unwrap();
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[1].get("B"), Some("4"));
    }

    #[test]
    fn test_parallel_keeps_row_order() {
        let mut text = String::from("N   V\n");
        for n in 0..500 {
            text.push_str(&format!("{n:<3} {}\n", n % 7));
        }
        let sequential = parse_str(&text, &ParseOptions::default()).unwrap();
        let parallel = parse_str(&text, &ParseOptions::default().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.records[499].get("N"), Some("499"));
    }

    #[test]
    fn test_format_error_propagates() {
        let err = parse_str("just text\nmore text\n", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::Format(FormatError::NoDataRow)));
    }

    #[test]
    fn test_duplicate_header_names() {
        let table = parse_str("A  B  A\n1  2  3\n", &ParseOptions::default()).unwrap();
        assert_eq!(table.schema.names().collect::<Vec<_>>(), vec!["A", "B", "A"]);
        let record = &table.records[0];
        assert_eq!(record.values().collect::<Vec<_>>(), vec!["1", "2", "3"]);
        assert_eq!(record.get("A"), Some("1"));
    }

    #[test]
    fn test_non_breaking_indent_is_not_a_data_row() {
        let err = parse_str("  Dy MxT\n\u{a0}\u{a0} 1  88\n", &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::Format(FormatError::NoDataRow)));
    }

    #[test]
    fn test_read_table_missing_file() {
        let err = read_table(Path::new("/nonexistent/report.dat"), &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
