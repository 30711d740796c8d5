use tracing::instrument;

use crate::{
    column::{
        BlobColumnHandler, BoolColumnHandler, ByteColumnHandler, ColumnHandler,
        DoubleColumnHandler, FloatColumnHandler, IntColumnHandler, LongColumnHandler,
        ShortColumnHandler, StringColumnHandler, TimestampColumnHandler,
    },
    cursor::Cursor,
    error::DbResult,
    ty::{FieldType, PrimitiveType},
    value::Value,
};

/// The family of [`ColumnHandler`]s, one per [`PrimitiveType`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ColumnHandlers;

impl ColumnHandlers {
    /// Every handler, in the fixed order used by [`ColumnHandlers::find`].
    pub const ALL: [&'static dyn ColumnHandler; 10] = [
        &BoolColumnHandler,
        &ByteColumnHandler,
        &ShortColumnHandler,
        &IntColumnHandler,
        &LongColumnHandler,
        &FloatColumnHandler,
        &DoubleColumnHandler,
        &TimestampColumnHandler,
        &StringColumnHandler,
        &BlobColumnHandler,
    ];

    /// Returns the handler responsible for the given field type.
    pub fn handler_for(target: FieldType) -> &'static dyn ColumnHandler {
        match target.primitive() {
            PrimitiveType::Bool => &BoolColumnHandler,
            PrimitiveType::Byte => &ByteColumnHandler,
            PrimitiveType::ShortInt => &ShortColumnHandler,
            PrimitiveType::Int => &IntColumnHandler,
            PrimitiveType::BigInt => &LongColumnHandler,
            PrimitiveType::Float => &FloatColumnHandler,
            PrimitiveType::Double => &DoubleColumnHandler,
            PrimitiveType::Timestamp => &TimestampColumnHandler,
            PrimitiveType::Text => &StringColumnHandler,
            PrimitiveType::Blob => &BlobColumnHandler,
        }
    }

    /// Tries every handler's [`ColumnHandler::matches`] in order, returning the
    /// first one that matches.
    ///
    /// Always agrees with [`ColumnHandlers::handler_for`], which should be
    /// preferred.
    pub fn find(target: FieldType) -> Option<&'static dyn ColumnHandler> {
        Self::ALL
            .into_iter()
            .find(|handler| handler.matches(target))
    }

    /// Reads the column at the given 1-based index of the current row as the
    /// given field type.
    #[instrument(level = "trace", skip(cursor))]
    pub fn coerce(cursor: &mut dyn Cursor, index: usize, target: FieldType) -> DbResult<Value> {
        Self::handler_for(target).apply(cursor, index)
    }
}
