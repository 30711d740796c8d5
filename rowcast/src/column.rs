use crate::{
    cursor::Cursor,
    error::DbResult,
    ty::{FieldType, PrimitiveType},
    value::Value,
};

mod handlers;
pub use handlers::*;

mod registry;
pub use registry::*;

/// Converts a single column of the current row into a declared field type.
///
/// Every implementation is responsible for exactly one primitive type, in both
/// its primitive and boxed forms.
pub trait ColumnHandler: Send + Sync {
    /// The primitive type this handler is responsible for.
    fn ty(&self) -> PrimitiveType;

    /// Checks whether this handler is responsible for the given field type.
    fn matches(&self, target: FieldType) -> bool;

    /// Reads the column at the given 1-based index of the current row, using
    /// the cursor accessor of this handler's type.
    ///
    /// The cursor is not advanced.
    fn apply(&self, cursor: &mut dyn Cursor, index: usize) -> DbResult<Value>;
}
