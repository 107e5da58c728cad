//! Core types for recovering tables from whitespace-aligned text reports.
//!
//! A report line is broken into [`Token`]s, each carrying the half-open
//! character [`Span`] it occupies. The header line becomes a [`Schema`] of
//! [`Column`]s, and every data line is resolved against that schema into a
//! [`Record`]. A parsed file is a [`Table`].

mod record;
mod schema;
mod span;

pub use record::{Record, Table};
pub use schema::{Column, Schema};
pub use span::{Span, Token};
