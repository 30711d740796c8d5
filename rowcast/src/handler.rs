use std::fmt;

use crate::{config::DEFAULT_SCALAR_COLUMN, cursor::Cursor, error::DbResult, value::Value};

mod scalar;
pub use scalar::*;

mod column_list;
pub use column_list::*;

mod row;
pub use row::*;

/// Converts a whole query result into a single output.
///
/// Implementors are handed a cursor positioned before its first row and decide
/// how many rows to consume. They never close the cursor, which is the
/// responsibility of whoever opened the query.
pub trait ResultSetHandler {
    type Output;

    /// Consumes (part of) the given cursor to produce the output.
    fn handle(&self, cursor: &mut dyn Cursor) -> DbResult<Self::Output>;
}

/// Selects a single column of a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnRef {
    /// A 1-based column index.
    ///
    /// The index is not checked until the column is read, where the cursor
    /// rejects `0` or an index past the last column with
    /// [`Error::ColumnIndexOutOfBounds`](crate::error::Error::ColumnIndexOutOfBounds).
    Index(usize),
    /// A column name, matched case-insensitively by the cursor.
    Name(String),
}

impl ColumnRef {
    /// Reads the selected column from the cursor's current row.
    pub fn read(&self, cursor: &mut dyn Cursor) -> DbResult<Value> {
        match self {
            ColumnRef::Index(index) => cursor.get(*index),
            ColumnRef::Name(name) => cursor.get_by_name(name),
        }
    }
}

impl Default for ColumnRef {
    fn default() -> Self {
        ColumnRef::Index(DEFAULT_SCALAR_COLUMN)
    }
}

impl From<usize> for ColumnRef {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::Name(name.to_owned())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::Name(name)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Index(index) => write!(f, "#{index}"),
            ColumnRef::Name(name) => write!(f, "`{name}`"),
        }
    }
}
