use std::{fmt, marker::PhantomData};

use tracing::{debug, instrument};

use crate::{
    column::ColumnHandlers,
    cursor::Cursor,
    error::DbResult,
    handler::ResultSetHandler,
    row::{FromRow, Row},
    ty::FieldType,
    value::Value,
};

/// A [`ResultSetHandler`] that maps the first row into a `T`.
///
/// Like [`ScalarHandler`](crate::handler::ScalarHandler), it advances the
/// cursor exactly once and yields `None` if there is no row.
pub struct RowHandler<T> {
    _marker: PhantomData<fn() -> T>,
}

/// A [`ResultSetHandler`] that maps every row into a `T`, in cursor order. The
/// cursor is drained.
pub struct RowListHandler<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> RowHandler<T> {
    pub fn new() -> RowHandler<T> {
        RowHandler {
            _marker: PhantomData,
        }
    }
}

impl<T> RowListHandler<T> {
    pub fn new() -> RowListHandler<T> {
        RowListHandler {
            _marker: PhantomData,
        }
    }
}

impl<T: FromRow> ResultSetHandler for RowHandler<T> {
    type Output = Option<T>;

    #[instrument(name = "RowHandler", level = "debug", skip_all)]
    fn handle(&self, cursor: &mut dyn Cursor) -> DbResult<Option<T>> {
        if !cursor.advance()? {
            debug!("no rows");
            return Ok(None);
        }
        let mapping = RowMapping::resolve(cursor, T::FIELDS)?;
        T::from_row(mapping.read(cursor)?).map(Some)
    }
}

impl<T: FromRow> ResultSetHandler for RowListHandler<T> {
    type Output = Vec<T>;

    #[instrument(name = "RowListHandler", level = "debug", skip_all)]
    fn handle(&self, cursor: &mut dyn Cursor) -> DbResult<Vec<T>> {
        let mut list = Vec::new();
        if !cursor.advance()? {
            debug!("no rows");
            return Ok(list);
        }
        // Columns are resolved once, on the first row.
        let mapping = RowMapping::resolve(cursor, T::FIELDS)?;
        loop {
            list.push(T::from_row(mapping.read(cursor)?)?);
            if !cursor.advance()? {
                break;
            }
        }
        debug!(rows = list.len(), "mapped rows");
        Ok(list)
    }
}

/// Declared fields paired with the 1-based index of their column.
struct RowMapping {
    fields: Vec<(&'static str, usize, FieldType)>,
}

impl RowMapping {
    fn resolve(
        cursor: &mut dyn Cursor,
        fields: &'static [(&'static str, FieldType)],
    ) -> DbResult<RowMapping> {
        let fields = fields
            .iter()
            .map(|&(name, ty)| Ok((name, cursor.column_index(name)?, ty)))
            .collect::<DbResult<_>>()?;
        Ok(RowMapping { fields })
    }

    /// Reads the declared fields of the current row.
    fn read(&self, cursor: &mut dyn Cursor) -> DbResult<Row> {
        let mut row = Row::new();
        for &(name, index, ty) in &self.fields {
            let value = match ty {
                FieldType::Boxed(_) if cursor.get(index)?.is_null() => Value::Null,
                _ => ColumnHandlers::coerce(cursor, index, ty)?,
            };
            row.set(name.to_owned(), value);
        }
        Ok(row)
    }
}

impl<T> Default for RowHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Default for RowListHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RowHandler<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Clone for RowListHandler<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RowHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowHandler")
    }
}

impl<T> fmt::Debug for RowListHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowListHandler")
    }
}
