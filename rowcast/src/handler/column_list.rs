use std::{fmt, marker::PhantomData};

use tracing::{debug, instrument};

use crate::{
    cursor::Cursor,
    error::DbResult,
    handler::{ColumnRef, ResultSetHandler},
    value::{FromValue, Value},
};

/// A [`ResultSetHandler`] that extracts one column of every row into a list,
/// in cursor order. The cursor is drained.
pub struct ColumnListHandler<T = Value> {
    column: ColumnRef,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ColumnListHandler<T> {
    /// Creates a handler for the first column.
    pub fn new() -> ColumnListHandler<T> {
        Self::from_ref(ColumnRef::default())
    }

    /// See [`ScalarHandler::with_index`](crate::handler::ScalarHandler::with_index).
    pub fn with_index(index: usize) -> ColumnListHandler<T> {
        Self::from_ref(ColumnRef::Index(index))
    }

    pub fn with_name(name: impl Into<String>) -> ColumnListHandler<T> {
        Self::from_ref(ColumnRef::Name(name.into()))
    }

    pub fn from_ref(column: ColumnRef) -> ColumnListHandler<T> {
        ColumnListHandler {
            column,
            _marker: PhantomData,
        }
    }

    pub fn column(&self) -> &ColumnRef {
        &self.column
    }
}

impl<T: FromValue> ResultSetHandler for ColumnListHandler<T> {
    type Output = Vec<T>;

    #[instrument(name = "ColumnListHandler", level = "debug", skip_all, fields(column = %self.column))]
    fn handle(&self, cursor: &mut dyn Cursor) -> DbResult<Vec<T>> {
        let mut list = Vec::new();
        while cursor.advance()? {
            list.push(T::from_value(self.column.read(cursor)?)?);
        }
        debug!(rows = list.len(), "collected column");
        Ok(list)
    }
}

impl<T> Default for ColumnListHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ColumnListHandler<T> {
    fn clone(&self) -> Self {
        Self::from_ref(self.column.clone())
    }
}

impl<T> fmt::Debug for ColumnListHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnListHandler")
            .field("column", &self.column)
            .finish()
    }
}
