use std::fmt;

use crate::{
    error::{DbResult, Error},
    ty::PrimitiveType,
};

/// A generic (boxed) column value, as yielded by a [`Cursor`].
///
/// [`Cursor`]: crate::cursor::Cursor
#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Byte(u8),
    ShortInt(i16),
    Int(i32),
    BigInt(i64),
    Float(f32),
    Double(f64),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the default (zero) value for the given [`PrimitiveType`].
    ///
    /// A typed read of a `NULL` value (`coerce_*`) yields this same value.
    pub fn default_for_type(ty: PrimitiveType) -> Self {
        match ty {
            PrimitiveType::Bool => Value::Bool(false),
            PrimitiveType::Byte => Value::Byte(0),
            PrimitiveType::ShortInt => Value::ShortInt(0),
            PrimitiveType::Int => Value::Int(0),
            PrimitiveType::BigInt => Value::BigInt(0),
            PrimitiveType::Float => Value::Float(0.0),
            PrimitiveType::Double => Value::Double(0.0),
            PrimitiveType::Timestamp => Value::Timestamp(0),
            PrimitiveType::Text => Value::Text(String::with_capacity(0)),
            PrimitiveType::Blob => Value::Blob(Vec::with_capacity(0)),
        }
    }

    /// Returns the corresponding primitive type, or `None` for [`Value::Null`].
    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        let ty = match self {
            Value::Null => return None,
            Value::Bool(_) => PrimitiveType::Bool,
            Value::Byte(_) => PrimitiveType::Byte,
            Value::ShortInt(_) => PrimitiveType::ShortInt,
            Value::Int(_) => PrimitiveType::Int,
            Value::BigInt(_) => PrimitiveType::BigInt,
            Value::Float(_) => PrimitiveType::Float,
            Value::Double(_) => PrimitiveType::Double,
            Value::Timestamp(_) => PrimitiveType::Timestamp,
            Value::Text(_) => PrimitiveType::Text,
            Value::Blob(_) => PrimitiveType::Blob,
        };
        Some(ty)
    }

    /// Returns the canonical name of the value's type.
    pub fn type_name(&self) -> &'static str {
        self.primitive_type().map_or("null", PrimitiveType::name)
    }

    /// Checks whether this is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Reads the value as a boolean, using driver conversion rules.
    pub fn coerce_bool(&self) -> DbResult<bool> {
        let expected = PrimitiveType::Bool.name();
        match self {
            Value::Null => Ok(false),
            Value::Bool(inner) => Ok(*inner),
            Value::Byte(inner) => Ok(*inner != 0),
            Value::ShortInt(inner) => Ok(*inner != 0),
            Value::Int(inner) => Ok(*inner != 0),
            Value::BigInt(inner) | Value::Timestamp(inner) => Ok(*inner != 0),
            Value::Float(inner) => Ok(*inner != 0.0),
            Value::Double(inner) => Ok(*inner != 0.0),
            Value::Text(inner) => match inner.trim() {
                s if s.eq_ignore_ascii_case("true") || s == "1" => Ok(true),
                s if s.eq_ignore_ascii_case("false") || s == "0" => Ok(false),
                _ => Err(Error::mismatch(expected, self.type_name())),
            },
            Value::Blob(_) => Err(Error::mismatch(expected, self.type_name())),
        }
    }

    /// Reads the value as text, using driver conversion rules.
    pub fn coerce_string(&self) -> DbResult<String> {
        match self {
            Value::Null => Ok(String::new()),
            Value::Text(inner) => Ok(inner.clone()),
            Value::Blob(_) => Err(Error::mismatch(
                PrimitiveType::Text.name(),
                self.type_name(),
            )),
            other => Ok(other.to_string()),
        }
    }

    /// Reads the value as raw bytes, using driver conversion rules.
    pub fn coerce_bytes(&self) -> DbResult<Vec<u8>> {
        match self {
            Value::Null => Ok(Vec::new()),
            Value::Blob(inner) => Ok(inner.clone()),
            Value::Text(inner) => Ok(inner.as_bytes().to_vec()),
            other => Err(Error::mismatch(
                PrimitiveType::Blob.name(),
                other.type_name(),
            )),
        }
    }
}

macro_rules! impl_integer_coercions {
    ($($method:ident => $ty:ty as $target:expr;)+) => {
        impl Value {
            $(
                #[doc = concat!("Reads the value as `", stringify!($ty), "`, using driver conversion rules.")]
                ///
                /// Integers must fit in the target type. Floating point numbers
                /// are truncated toward zero and must fit as well. Booleans read
                /// as `0` or `1` and text is parsed.
                pub fn $method(&self) -> DbResult<$ty> {
                    let out_of_range = || Error::mismatch($target.name(), self.type_name());
                    match self {
                        Value::Null => Ok(0),
                        Value::Bool(inner) => Ok(<$ty>::from(u8::from(*inner))),
                        Value::Byte(inner) => <$ty>::try_from(*inner).map_err(|_| out_of_range()),
                        Value::ShortInt(inner) => <$ty>::try_from(*inner).map_err(|_| out_of_range()),
                        Value::Int(inner) => <$ty>::try_from(*inner).map_err(|_| out_of_range()),
                        Value::BigInt(inner) | Value::Timestamp(inner) => {
                            <$ty>::try_from(*inner).map_err(|_| out_of_range())
                        }
                        Value::Float(inner) => {
                            truncate_float(f64::from(*inner), <$ty>::MIN as f64, <$ty>::MAX as f64)
                                .map(|truncated| truncated as $ty)
                                .ok_or_else(out_of_range)
                        }
                        Value::Double(inner) => {
                            truncate_float(*inner, <$ty>::MIN as f64, <$ty>::MAX as f64)
                                .map(|truncated| truncated as $ty)
                                .ok_or_else(out_of_range)
                        }
                        Value::Text(inner) => inner
                            .trim()
                            .parse::<$ty>()
                            .map_err(|_| Error::mismatch($target.name(), "text")),
                        Value::Blob(_) => Err(Error::mismatch($target.name(), "blob")),
                    }
                }
            )+
        }
    };
}

impl_integer_coercions! {
    coerce_u8 => u8 as PrimitiveType::Byte;
    coerce_i16 => i16 as PrimitiveType::ShortInt;
    coerce_i32 => i32 as PrimitiveType::Int;
    coerce_i64 => i64 as PrimitiveType::BigInt;
}

/// Truncates `value` toward zero, returning `None` if the result is NaN or
/// not within `min..=max`.
fn truncate_float(value: f64, min: f64, max: f64) -> Option<f64> {
    let truncated = value.trunc();
    // `max + 1` is a power of two, thus exact, even where `max` rounds up.
    (truncated >= min && truncated < max + 1.0).then_some(truncated)
}

macro_rules! impl_float_coercions {
    ($($method:ident => $ty:ty as $target:expr;)+) => {
        impl Value {
            $(
                #[doc = concat!("Reads the value as `", stringify!($ty), "`, using driver conversion rules.")]
                ///
                /// Numbers are converted with `as` semantics, booleans read as
                /// `0` or `1` and text is parsed.
                pub fn $method(&self) -> DbResult<$ty> {
                    match self {
                        Value::Null => Ok(0.0),
                        Value::Bool(inner) => Ok(<$ty>::from(u8::from(*inner))),
                        Value::Byte(inner) => Ok(*inner as $ty),
                        Value::ShortInt(inner) => Ok(*inner as $ty),
                        Value::Int(inner) => Ok(*inner as $ty),
                        Value::BigInt(inner) | Value::Timestamp(inner) => Ok(*inner as $ty),
                        Value::Float(inner) => Ok(*inner as $ty),
                        Value::Double(inner) => Ok(*inner as $ty),
                        Value::Text(inner) => inner
                            .trim()
                            .parse::<$ty>()
                            .map_err(|_| Error::mismatch($target.name(), "text")),
                        Value::Blob(_) => Err(Error::mismatch($target.name(), "blob")),
                    }
                }
            )+
        }
    };
}

impl_float_coercions! {
    coerce_f32 => f32 as PrimitiveType::Float;
    coerce_f64 => f64 as PrimitiveType::Double;
}

/// Typed extraction of a [`Value`].
///
/// Unlike the `coerce_*` methods, extraction performs no conversion: the
/// stored value must already be of the requested type.
pub trait FromValue: Sized {
    /// Extracts `Self` from the given value.
    fn from_value(value: Value) -> DbResult<Self>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> DbResult<Self> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> DbResult<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $expected:literal: $($variant:ident)|+;)+) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> DbResult<Self> {
                    match value {
                        $(Value::$variant(inner))|+ => Ok(inner),
                        other => Err(Error::mismatch($expected, other.type_name())),
                    }
                }
            }
        )+
    };
}

impl_from_value! {
    bool => "bool": Bool;
    u8 => "byte": Byte;
    i16 => "shortint": ShortInt;
    i32 => "int": Int;
    // Timestamps are stored as plain milliseconds.
    i64 => "bigint": BigInt | Timestamp;
    f32 => "float": Float;
    f64 => "double": Double;
    String => "text": Text;
    Vec<u8> => "blob": Blob;
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(inner) => inner.fmt(f),
            Value::Byte(inner) => inner.fmt(f),
            Value::ShortInt(inner) => inner.fmt(f),
            Value::Int(inner) => inner.fmt(f),
            Value::BigInt(inner) => inner.fmt(f),
            Value::Float(inner) => inner.fmt(f),
            Value::Double(inner) => inner.fmt(f),
            Value::Timestamp(inner) => inner.fmt(f),
            Value::Text(inner) => inner.fmt(f),
            Value::Blob(inner) => write!(f, "<bytes ({})>", inner.len()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(inner) => write!(f, "Bool({inner:?})"),
            Value::Byte(inner) => write!(f, "Byte({inner:?})"),
            Value::ShortInt(inner) => write!(f, "ShortInt({inner:?})"),
            Value::Int(inner) => write!(f, "Int({inner:?})"),
            Value::BigInt(inner) => write!(f, "BigInt({inner:?})"),
            Value::Float(inner) => write!(f, "Float({inner:?})"),
            Value::Double(inner) => write!(f, "Double({inner:?})"),
            Value::Timestamp(inner) => write!(f, "Timestamp({inner:?})"),
            Value::Text(inner) => write!(f, "Text({inner:?})"),
            Value::Blob(inner) => write!(f, "Blob(<{} bytes>)", inner.len()),
        }
    }
}
