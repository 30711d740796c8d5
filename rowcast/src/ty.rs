/// `rowcast` supported primitive (i.e., non-composite) column types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Byte,
    ShortInt,
    Int,
    BigInt,
    Float,
    Double,
    Timestamp,
    Text,
    Blob,
}

impl PrimitiveType {
    /// Every supported primitive type, in the order used for dispatch.
    pub const ALL: [PrimitiveType; 10] = [
        PrimitiveType::Bool,
        PrimitiveType::Byte,
        PrimitiveType::ShortInt,
        PrimitiveType::Int,
        PrimitiveType::BigInt,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Timestamp,
        PrimitiveType::Text,
        PrimitiveType::Blob,
    ];

    /// Returns the canonical type name.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Byte => "byte",
            PrimitiveType::ShortInt => "shortint",
            PrimitiveType::Int => "int",
            PrimitiveType::BigInt => "bigint",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Timestamp => "timestamp",
            PrimitiveType::Text => "text",
            PrimitiveType::Blob => "blob",
        }
    }
}

/// A declared target field type.
///
/// Each primitive type has two forms: the plain primitive one and the boxed
/// one, which also admits the absence of a value (e.g., `f32` versus
/// `Option<f32>`). Both forms are read through the same column accessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Primitive(PrimitiveType),
    Boxed(PrimitiveType),
}

impl FieldType {
    /// Returns the underlying primitive type, regardless of the form.
    pub fn primitive(self) -> PrimitiveType {
        match self {
            FieldType::Primitive(primitive) | FieldType::Boxed(primitive) => primitive,
        }
    }

    /// Checks whether this is the boxed form.
    pub fn is_boxed(self) -> bool {
        matches!(self, FieldType::Boxed(_))
    }
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The column value type.
    pub ty: PrimitiveType,
    /// The column identifier. Lookups by name are case-insensitive.
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: PrimitiveType) -> Column {
        Column {
            ty,
            name: name.into(),
        }
    }
}
