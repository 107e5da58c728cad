//! Column alignment: resolving a data line's words against the schema.
//!
//! Alignment walks two cursors left to right, one over schema columns and one
//! over the row's tokens. Each [`step`] compares the current token with the
//! current column and takes exactly one of three transitions:
//!
//! | Condition                      | Action      | Advances        |
//! |--------------------------------|-------------|-----------------|
//! | intervals overlap              | `Match`     | column and word |
//! | column starts before token end | `EmptyCell` | column          |
//! | token ends before column start | `Discard`   | word            |
//!
//! Every transition advances at least one cursor, so [`Cursor::progress`]
//! strictly increases and a row of `n` tokens against `m` columns reaches the
//! fixed point within `m + n` steps.
//!
//! Only the relative order of intervals is used, so columns whose labels are
//! left- or right-aligned over their cells are handled alike.

use coltab_model::{Column, Record, Schema, Token};
use tracing::trace;

use crate::tokenize::tokenize;

/// Position of the alignment walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index into the schema columns.
    pub column: usize,
    /// Index into the row tokens.
    pub word: usize,
}

impl Cursor {
    /// Number of columns plus words consumed so far.
    pub fn progress(&self) -> usize {
        self.column + self.word
    }
}

/// What a single alignment step decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The token is the cell for the column.
    Match,
    /// The column has no cell on this row.
    EmptyCell,
    /// The token sits between columns and is dropped.
    Discard,
}

/// One transition of the alignment state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: Cursor,
}

/// Advances the alignment by one transition.
///
/// Returns `None` once either the columns or the tokens are exhausted.
pub fn step(cursor: Cursor, schema: &Schema, tokens: &[Token]) -> Option<Transition> {
    let column = schema.get(cursor.column)?;
    let token = tokens.get(cursor.word)?;
    let action = classify(column, token);
    let next = match action {
        Action::Match => Cursor {
            column: cursor.column + 1,
            word: cursor.word + 1,
        },
        Action::EmptyCell => Cursor {
            column: cursor.column + 1,
            ..cursor
        },
        Action::Discard => Cursor {
            word: cursor.word + 1,
            ..cursor
        },
    };
    Some(Transition { action, next })
}

fn classify(column: &Column, token: &Token) -> Action {
    if token.span.overlaps(&column.span) {
        Action::Match
    } else if column.span.start < token.span.end {
        Action::EmptyCell
    } else {
        Action::Discard
    }
}

/// Resolves one data line into a record.
pub fn align(schema: &Schema, row: &str) -> Record {
    align_tokens(schema, &tokenize(row))
}

/// Resolves an already tokenized data line into a record.
///
/// Columns left over when the tokens run out get empty cells; tokens left
/// over when the columns run out are ignored.
pub fn align_tokens(schema: &Schema, tokens: &[Token]) -> Record {
    let mut values = vec![String::new(); schema.len()];
    let mut cursor = Cursor::default();
    while let Some(transition) = step(cursor, schema, tokens) {
        match transition.action {
            Action::Match => {
                values[cursor.column].clone_from(&tokens[cursor.word].text);
            }
            Action::EmptyCell => {
                trace!(column = cursor.column, "empty cell");
            }
            Action::Discard => {
                trace!(word = cursor.word, token = %tokens[cursor.word].text, "discarded token");
            }
        }
        cursor = transition.next;
    }
    Record::from_values(schema, values)
}
