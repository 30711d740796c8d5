use std::borrow::Cow;

pub type DbResult<T, E = Error> = Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The given column index is not a valid 1-based index for the current
    /// row.
    #[error("column index out of bounds ({index}, row has {len} columns)")]
    ColumnIndexOutOfBounds { index: usize, len: usize },

    /// No column with the given name exists in the result.
    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    /// A column was read while the cursor was not positioned on a row, i.e.,
    /// before the first advance or after the last row.
    #[error("cursor is not positioned on a row")]
    NoCurrentRow,

    /// The cursor was already closed.
    #[error("cursor is closed")]
    Closed,

    /// A row didn't have the same number of values as the result's columns.
    #[error("invalid row width: expected {expected} values, but found {actual}")]
    RowWidthMismatch { expected: usize, actual: usize },

    /// The stored value can't be read as the requested type.
    #[error("type mismatch: expected `{expected}`, but found `{actual}`")]
    TypeMismatch {
        expected: &'static str,
        actual: Cow<'static, str>,
    },

    /// An error raised by an external cursor implementation.
    #[error("driver error: {0}")]
    Driver(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Shorthand to build a [`Error::TypeMismatch`].
    pub(crate) fn mismatch(expected: &'static str, actual: impl Into<Cow<'static, str>>) -> Self {
        Error::TypeMismatch {
            expected,
            actual: actual.into(),
        }
    }
}
