//! Table recovery for whitespace-aligned text reports.
//!
//! Fixed-width reports (weather summaries, league tables, tool output) line
//! their cells up under header labels but use no single delimiter, allow
//! empty cells, and may align each label to the left or right of its cells.
//! This crate recovers one [`Record`](coltab_model::Record) per data line by
//! comparing the character intervals of the words on the line with those of
//! the header labels.
//!
//! # Features
//!
//! - **Tokenizing**: words with their character intervals ([`tokenize`])
//! - **Schema Detection**: header row lookup and unlabeled id columns ([`detect_schema`])
//! - **Column Alignment**: the interval-matching state machine ([`step`], [`align`])
//! - **Report Loading**: whole files or strings into a [`Table`](coltab_model::Table)
//!
//! # Example
//!
//! ```
//! use coltab_ingest::{ParseOptions, parse_str};
//!
//! let report = "  Dy MxT   MnT\n   1  88    59\n   2  79\n";
//! let table = parse_str(report, &ParseOptions::default())?;
//! assert_eq!(table.records[0].get("MnT"), Some("59"));
//! assert_eq!(table.records[1].get("MnT"), Some(""));
//! # Ok::<(), coltab_ingest::IngestError>(())
//! ```

mod align;
mod error;
mod options;
mod reader;
mod schema;
mod tokenize;

// === Error Types ===
pub use error::{FormatError, IngestError, Result};

// === Options ===
pub use options::{DEFAULT_ID_PREFIX, ParseOptions};

// === Tokenizing ===
pub use tokenize::{is_data_line, is_header_line, tokenize};

// === Schema Detection ===
pub use schema::{detect_schema, unique_id_name};

// === Alignment ===
pub use align::{Action, Cursor, Transition, align, align_tokens, step};

// === Report Loading ===
pub use reader::{parse_lines, parse_str, read_table};
