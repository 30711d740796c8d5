use crate::{
    column::ColumnHandler,
    cursor::Cursor,
    error::DbResult,
    ty::{FieldType, PrimitiveType},
    value::Value,
};

macro_rules! column_handlers {
    ($($(#[$meta:meta])* $handler:ident: $primitive:ident => $accessor:ident => $variant:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
            pub struct $handler;

            impl ColumnHandler for $handler {
                fn ty(&self) -> PrimitiveType {
                    PrimitiveType::$primitive
                }

                fn matches(&self, target: FieldType) -> bool {
                    matches!(
                        target,
                        FieldType::Primitive(PrimitiveType::$primitive)
                            | FieldType::Boxed(PrimitiveType::$primitive)
                    )
                }

                fn apply(&self, cursor: &mut dyn Cursor, index: usize) -> DbResult<Value> {
                    cursor.$accessor(index).map(Value::$variant)
                }
            }
        )+
    };
}

column_handlers! {
    /// Reads `bool` columns.
    BoolColumnHandler: Bool => get_bool => Bool;
    /// Reads 8-bit unsigned integer columns.
    ByteColumnHandler: Byte => get_byte => Byte;
    /// Reads 16-bit integer columns.
    ShortColumnHandler: ShortInt => get_short => ShortInt;
    /// Reads 32-bit integer columns.
    IntColumnHandler: Int => get_int => Int;
    /// Reads 64-bit integer columns.
    LongColumnHandler: BigInt => get_long => BigInt;
    /// Reads 32-bit floating point columns.
    FloatColumnHandler: Float => get_float => Float;
    /// Reads 64-bit floating point columns.
    DoubleColumnHandler: Double => get_double => Double;
    /// Reads timestamp columns, as milliseconds since the Unix epoch.
    TimestampColumnHandler: Timestamp => get_timestamp => Timestamp;
    /// Reads text columns.
    StringColumnHandler: Text => get_string => Text;
    /// Reads binary columns.
    BlobColumnHandler: Blob => get_bytes => Blob;
}
