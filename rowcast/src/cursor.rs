use crate::{error::DbResult, value::Value};

mod mem;
pub use mem::*;

/// A forward-only, single-pass cursor over the rows of a query result.
///
/// Columns are addressed by 1-based index or by case-insensitive name. A
/// cursor is owned (and closed) by whoever opened the query; handlers only
/// advance it and read from it.
///
/// Implementors only need to provide [`Cursor::advance`], [`Cursor::get`],
/// [`Cursor::get_by_name`] and [`Cursor::column_index`]. The typed accessors are expressed in terms of
/// [`Cursor::get`] through the `Value::coerce_*` conversion rules, but a
/// driver may override them to read its native representation directly.
pub trait Cursor {
    /// Moves to the next row. Returns `false` if there are no more rows.
    fn advance(&mut self) -> DbResult<bool>;

    /// Returns the generic value of the column at the given 1-based index in
    /// the current row.
    fn get(&mut self, index: usize) -> DbResult<Value>;

    /// Returns the generic value of the column with the given name in the
    /// current row.
    fn get_by_name(&mut self, name: &str) -> DbResult<Value>;

    /// Resolves a column name (case-insensitive) to its 1-based index.
    fn column_index(&mut self, name: &str) -> DbResult<usize>;

    fn get_bool(&mut self, index: usize) -> DbResult<bool> {
        self.get(index)?.coerce_bool()
    }

    fn get_byte(&mut self, index: usize) -> DbResult<u8> {
        self.get(index)?.coerce_u8()
    }

    fn get_short(&mut self, index: usize) -> DbResult<i16> {
        self.get(index)?.coerce_i16()
    }

    fn get_int(&mut self, index: usize) -> DbResult<i32> {
        self.get(index)?.coerce_i32()
    }

    fn get_long(&mut self, index: usize) -> DbResult<i64> {
        self.get(index)?.coerce_i64()
    }

    fn get_float(&mut self, index: usize) -> DbResult<f32> {
        self.get(index)?.coerce_f32()
    }

    fn get_double(&mut self, index: usize) -> DbResult<f64> {
        self.get(index)?.coerce_f64()
    }

    /// Reads a timestamp as milliseconds since the Unix epoch.
    fn get_timestamp(&mut self, index: usize) -> DbResult<i64> {
        self.get(index)?.coerce_i64()
    }

    fn get_string(&mut self, index: usize) -> DbResult<String> {
        self.get(index)?.coerce_string()
    }

    fn get_bytes(&mut self, index: usize) -> DbResult<Vec<u8>> {
        self.get(index)?.coerce_bytes()
    }
}
