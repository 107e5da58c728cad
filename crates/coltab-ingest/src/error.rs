//! Error types for report ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Structural problems that prevent a schema from being detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No line begins with a digit.
    #[error("no data row found (expected a line starting with a digit)")]
    NoDataRow,

    /// Nothing above the first data row begins with a letter.
    #[error("no header row found above the first data row at line {data_line}")]
    NoHeaderRow {
        /// 1-based line number of the first data row.
        data_line: usize,
    },
}

/// Errors that can occur while loading a report.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the input file.
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input does not look like a header-plus-data report.
    #[error("format error")]
    Format(#[from] FormatError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = IngestError::from(FormatError::NoHeaderRow { data_line: 3 });
        assert_eq!(err.to_string(), "format error");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("no header row found above the first data row at line 3")
        );
    }

    #[test]
    fn test_file_read_display() {
        let err = IngestError::FileRead {
            path: PathBuf::from("/data/w_data.dat"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read file /data/w_data.dat");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("missing"));
    }
}
