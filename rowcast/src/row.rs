use std::collections::HashMap;

use crate::{
    error::{DbResult, Error},
    ty::FieldType,
    value::{FromValue, Value},
};

/// A mapped row: the values of an entity's declared fields, by field name.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    inner: HashMap<String, Value>,
}

impl Row {
    /// Constructs a new empty row.
    pub fn new() -> Row {
        Row {
            inner: HashMap::new(),
        }
    }

    /// Returns a reference to the underlying value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner.get(name)
    }

    /// Sets a value.
    pub fn set(&mut self, name: String, value: Value) {
        self.inner.insert(name, value);
    }

    /// Removes the value of the given field and extracts it as a `T`.
    ///
    /// Fails with [`Error::UnknownColumn`] if the row has no such field.
    pub fn take<T: FromValue>(&mut self, name: &str) -> DbResult<T> {
        let value = self
            .inner
            .remove(name)
            .ok_or_else(|| Error::UnknownColumn(name.to_owned()))?;
        T::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, Value>> for Row {
    fn from(inner: HashMap<String, Value>) -> Row {
        Row { inner }
    }
}

/// An entity built from one result row.
///
/// The entity declares its fields as `(name, type)` pairs. Each field is read
/// from the column of the same name (case-insensitive) by the column handler
/// of its type, and the resulting [`Row`] is handed to [`FromRow::from_row`].
///
/// A [`FieldType::Boxed`] field reads `NULL` as [`Value::Null`]; a
/// [`FieldType::Primitive`] one reads it as the type's zero value.
pub trait FromRow: Sized {
    /// The declared fields, in order.
    const FIELDS: &'static [(&'static str, FieldType)];

    /// Builds the entity from the values of its declared fields.
    fn from_row(row: Row) -> DbResult<Self>;
}
