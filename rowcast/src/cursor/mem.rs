use tracing::trace;

use crate::{
    config::FIRST_COLUMN_INDEX,
    cursor::Cursor,
    error::{DbResult, Error},
    ty::Column,
    value::Value,
};

/// An in-memory [`Cursor`] over a fixed set of owned rows.
///
/// Rows are handed out in order, once. Like a driver cursor, it must be
/// advanced before the first row may be read and may be closed by its owner.
#[derive(Debug)]
pub struct MemCursor {
    columns: Vec<Column>,
    rows: std::vec::IntoIter<Vec<Value>>,
    current: Option<Vec<Value>>,
    position: usize,
    closed: bool,
}

impl MemCursor {
    /// Creates a new cursor, checking every row against the given columns.
    ///
    /// Each row must have exactly one value per column, and each non-null
    /// value must be of its column's type.
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> DbResult<MemCursor> {
        for row in &rows {
            if row.len() != columns.len() {
                return Err(Error::RowWidthMismatch {
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
            for (column, value) in columns.iter().zip(row) {
                match value.primitive_type() {
                    Some(ty) if ty != column.ty => {
                        return Err(Error::mismatch(column.ty.name(), ty.name()));
                    }
                    _ => (),
                }
            }
        }

        Ok(MemCursor {
            columns,
            rows: rows.into_iter(),
            current: None,
            position: 0,
            closed: false,
        })
    }

    /// Creates a cursor with the given columns but no rows.
    pub fn empty(columns: Vec<Column>) -> MemCursor {
        MemCursor {
            columns,
            rows: Vec::new().into_iter(),
            current: None,
            position: 0,
            closed: false,
        }
    }

    /// Returns the result columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns how many rows were advanced to so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Checks whether the cursor was closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closes the cursor, releasing the remaining rows. Any later access fails
    /// with [`Error::Closed`].
    pub fn close(&mut self) {
        if !self.closed {
            trace!(position = self.position, "closing cursor");
            self.closed = true;
            self.current = None;
            self.rows = Vec::new().into_iter();
        }
    }

    fn current_row(&self) -> DbResult<&[Value]> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.current.as_deref().ok_or(Error::NoCurrentRow)
    }
}

impl Cursor for MemCursor {
    fn advance(&mut self) -> DbResult<bool> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.current = self.rows.next();
        let has_row = self.current.is_some();
        if has_row {
            self.position += 1;
        }
        trace!(position = self.position, has_row, "advanced cursor");
        Ok(has_row)
    }

    fn get(&mut self, index: usize) -> DbResult<Value> {
        let row = self.current_row()?;
        index
            .checked_sub(FIRST_COLUMN_INDEX)
            .and_then(|i| row.get(i))
            .cloned()
            .ok_or(Error::ColumnIndexOutOfBounds {
                index,
                len: row.len(),
            })
    }

    fn get_by_name(&mut self, name: &str) -> DbResult<Value> {
        // Report a closed or unpositioned cursor before an unknown name.
        self.current_row()?;
        let index = self.column_index(name)?;
        self.get(index)
    }

    fn column_index(&mut self, name: &str) -> DbResult<usize> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.columns
            .iter()
            .position(|column| column.name.eq_ignore_ascii_case(name))
            .map(|i| i + FIRST_COLUMN_INDEX)
            .ok_or_else(|| Error::UnknownColumn(name.to_owned()))
    }
}
