use std::{fmt, marker::PhantomData};

use tracing::{debug, instrument};

use crate::{
    cursor::Cursor,
    error::DbResult,
    handler::{ColumnRef, ResultSetHandler},
    value::{FromValue, Value},
};

/// A [`ResultSetHandler`] that extracts one column of the first row as a `T`.
///
/// The handler advances the cursor exactly once. If there is no row, the
/// output is `None`. Otherwise the selected column is extracted with
/// [`FromValue`], so a `T` that doesn't match the stored value fails with a
/// type mismatch error. Use `T = Value` to get the column as-is, or
/// `T = Option<U>` to accept `NULL`.
///
/// The handler holds no mutable state; a single instance may be shared and
/// used against any number of cursors.
pub struct ScalarHandler<T = Value> {
    column: ColumnRef,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ScalarHandler<T> {
    /// Creates a handler for the first column.
    pub fn new() -> ScalarHandler<T> {
        Self::from_ref(ColumnRef::default())
    }

    /// Creates a handler for the column at the given 1-based index.
    ///
    /// An index of `0` is accepted here but fails every read of a non-empty
    /// cursor, like any index past the last column.
    pub fn with_index(index: usize) -> ScalarHandler<T> {
        Self::from_ref(ColumnRef::Index(index))
    }

    /// Creates a handler for the column with the given name.
    pub fn with_name(name: impl Into<String>) -> ScalarHandler<T> {
        Self::from_ref(ColumnRef::Name(name.into()))
    }

    pub fn from_ref(column: ColumnRef) -> ScalarHandler<T> {
        ScalarHandler {
            column,
            _marker: PhantomData,
        }
    }

    /// Returns the selected column.
    pub fn column(&self) -> &ColumnRef {
        &self.column
    }
}

impl<T: FromValue> ResultSetHandler for ScalarHandler<T> {
    type Output = Option<T>;

    #[instrument(name = "ScalarHandler", level = "debug", skip_all, fields(column = %self.column))]
    fn handle(&self, cursor: &mut dyn Cursor) -> DbResult<Option<T>> {
        if !cursor.advance()? {
            debug!("no rows");
            return Ok(None);
        }
        let value = self.column.read(cursor)?;
        T::from_value(value).map(Some)
    }
}

impl<T> Default for ScalarHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ScalarHandler<T> {
    fn clone(&self) -> Self {
        Self::from_ref(self.column.clone())
    }
}

impl<T> fmt::Debug for ScalarHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarHandler")
            .field("column", &self.column)
            .finish()
    }
}
