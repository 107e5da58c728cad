//! Error types for table queries.

use thiserror::Error;

/// Errors that can occur while evaluating a query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A referenced column is not in the table's schema.
    #[error("column '{column}' not found in schema")]
    MissingColumn { column: String },

    /// A cell that must be numeric could not be parsed.
    #[error("row {row}: column '{column}' is not numeric: '{value}'")]
    NotNumeric {
        /// 0-based record index.
        row: usize,
        column: String,
        value: String,
    },

    /// Every row was skipped, so there is no minimum.
    #[error("no row has numeric values in both '{minuend}' and '{subtrahend}'")]
    NoComparableRows { minuend: String, subtrahend: String },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
