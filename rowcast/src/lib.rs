//! Typed extraction of values from relational query results.
//!
//! [`handler`] turns a whole [`Cursor`] into one output (a scalar or a column
//! list or mapped rows) and [`column`] converts a single column into a
//! declared field type.

pub mod error;

pub mod config;

pub mod ty;
pub mod value;

pub mod cursor;

pub mod column;
pub mod handler;
pub mod row;

pub use cursor::Cursor;
