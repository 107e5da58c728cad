//! Numeric queries over recovered tables.
//!
//! The main query finds the row where the difference between two numeric
//! columns is smallest and reports a third column from that row, e.g. the day
//! with the smallest temperature spread or the team with the smallest goal
//! difference.

mod error;
mod min_diff;
mod numeric;

pub use error::{QueryError, Result};
pub use min_diff::{DiffMode, MinDiffOutcome, MinDiffQuery, NonNumericPolicy};
pub use numeric::parse_number;
