//! Minimum-difference row query.

use coltab_model::{Record, Table};
use serde::Serialize;
use tracing::debug;

use crate::error::{QueryError, Result};
use crate::numeric::parse_number;

/// How the difference between the two columns is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffMode {
    /// `minuend - subtrahend`.
    #[default]
    Signed,
    /// `|minuend - subtrahend|`.
    Absolute,
}

/// What to do with a row whose operand cells are not numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NonNumericPolicy {
    /// Leave the row out of the comparison.
    #[default]
    Skip,
    /// Fail the query with [`QueryError::NotNumeric`].
    Error,
}

/// Finds the row minimizing `minuend - subtrahend` and reports `select`.
#[derive(Debug, Clone)]
pub struct MinDiffQuery {
    pub minuend: String,
    pub subtrahend: String,
    pub select: String,
    pub mode: DiffMode,
    pub non_numeric: NonNumericPolicy,
}

/// The winning row of a [`MinDiffQuery`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinDiffOutcome {
    /// 0-based record index.
    pub row: usize,
    pub difference: f64,
    /// Value of the selected column on that row.
    pub value: String,
}

impl MinDiffQuery {
    pub fn new(
        minuend: impl Into<String>,
        subtrahend: impl Into<String>,
        select: impl Into<String>,
    ) -> Self {
        Self {
            minuend: minuend.into(),
            subtrahend: subtrahend.into(),
            select: select.into(),
            mode: DiffMode::default(),
            non_numeric: NonNumericPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_non_numeric(mut self, policy: NonNumericPolicy) -> Self {
        self.non_numeric = policy;
        self
    }

    /// Runs the query. Ties keep the earliest row.
    pub fn run(&self, table: &Table) -> Result<MinDiffOutcome> {
        for column in [&self.minuend, &self.subtrahend, &self.select] {
            if !table.schema.contains(column) {
                return Err(QueryError::MissingColumn {
                    column: column.clone(),
                });
            }
        }

        let mut best: Option<(usize, f64)> = None;
        for (row, record) in table.records.iter().enumerate() {
            let Some(difference) = self.difference(row, record)? else {
                continue;
            };
            if best.is_none_or(|(_, min)| difference < min) {
                best = Some((row, difference));
            }
        }

        let (row, difference) = best.ok_or_else(|| QueryError::NoComparableRows {
            minuend: self.minuend.clone(),
            subtrahend: self.subtrahend.clone(),
        })?;
        let value = table.records[row]
            .get(&self.select)
            .unwrap_or_default()
            .to_string();
        Ok(MinDiffOutcome {
            row,
            difference,
            value,
        })
    }

    fn difference(&self, row: usize, record: &Record) -> Result<Option<f64>> {
        let Some(minuend) = self.operand(row, record, &self.minuend)? else {
            return Ok(None);
        };
        let Some(subtrahend) = self.operand(row, record, &self.subtrahend)? else {
            return Ok(None);
        };
        let difference = minuend - subtrahend;
        Ok(Some(match self.mode {
            DiffMode::Signed => difference,
            DiffMode::Absolute => difference.abs(),
        }))
    }

    fn operand(&self, row: usize, record: &Record, column: &str) -> Result<Option<f64>> {
        let value = record.get(column).unwrap_or_default();
        if let Some(number) = parse_number(value) {
            return Ok(Some(number));
        }
        match self.non_numeric {
            NonNumericPolicy::Skip => {
                debug!(row, column, value, "skipping row with non-numeric cell");
                Ok(None)
            }
            NonNumericPolicy::Error => Err(QueryError::NotNumeric {
                row,
                column: column.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coltab_model::{Column, Schema};

    fn table(rows: &[[&str; 3]]) -> Table {
        let schema = Schema::new(vec![
            Column::new("Day", 0, 3),
            Column::new("Max", 4, 7),
            Column::new("Min", 8, 11),
        ]);
        let records = rows
            .iter()
            .map(|row| Record::from_values(&schema, row.map(String::from).to_vec()))
            .collect();
        Table { schema, records }
    }

    #[test]
    fn test_signed_minimum() {
        let t = table(&[["1", "88", "59"], ["2", "79", "63"], ["3", "50", "60"]]);
        let outcome = MinDiffQuery::new("Max", "Min", "Day").run(&t).unwrap();
        assert_eq!(outcome.row, 2);
        assert_eq!(outcome.value, "3");
        assert_eq!(outcome.difference, -10.0);
    }

    #[test]
    fn test_absolute_minimum() {
        let t = table(&[["1", "88", "59"], ["2", "79", "63"], ["3", "50", "60"]]);
        let outcome = MinDiffQuery::new("Max", "Min", "Day")
            .with_mode(DiffMode::Absolute)
            .run(&t)
            .unwrap();
        assert_eq!(outcome.value, "3");
        assert_eq!(outcome.difference, 10.0);
    }

    #[test]
    fn test_tie_keeps_first_row() {
        let t = table(&[["1", "10", "5"], ["2", "20", "15"]]);
        let outcome = MinDiffQuery::new("Max", "Min", "Day").run(&t).unwrap();
        assert_eq!(outcome.row, 0);
    }

    #[test]
    fn test_skip_policy_ignores_empty_cells() {
        let t = table(&[["1", "88", "59"], ["2", "90", ""]]);
        let outcome = MinDiffQuery::new("Max", "Min", "Day").run(&t).unwrap();
        assert_eq!(outcome.value, "1");
        assert_eq!(outcome.difference, 29.0);
    }

    #[test]
    fn test_error_policy_reports_cell() {
        let t = table(&[["1", "88", "59"], ["2", "90", ""]]);
        let err = MinDiffQuery::new("Max", "Min", "Day")
            .with_non_numeric(NonNumericPolicy::Error)
            .run(&t)
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::NotNumeric {
                row: 1,
                column: "Min".to_string(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_missing_column() {
        let t = table(&[["1", "88", "59"]]);
        let err = MinDiffQuery::new("Max", "Avg", "Day").run(&t).unwrap_err();
        assert_eq!(
            err,
            QueryError::MissingColumn {
                column: "Avg".to_string()
            }
        );
    }

    #[test]
    fn test_no_comparable_rows() {
        let t = table(&[["1", "", "59"], ["2", "x", "y"]]);
        let err = MinDiffQuery::new("Max", "Min", "Day").run(&t).unwrap_err();
        assert!(matches!(err, QueryError::NoComparableRows { .. }));
    }

    #[test]
    fn test_empty_table_has_no_minimum() {
        let t = table(&[]);
        let err = MinDiffQuery::new("Max", "Min", "Day").run(&t).unwrap_err();
        assert!(matches!(err, QueryError::NoComparableRows { .. }));
    }
}
