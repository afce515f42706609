//! Conversions between Rust values and `google.protobuf` dynamic values.

use prost_types::value::Kind;
use prost_types::{ListValue, Struct, Value};

/// Convert a value into a `google.protobuf.Value` for an argument map.
pub(crate) trait IntoProtobufValue {
    /// Perform the conversion.
    fn into_protobuf_value(self) -> Value;
}

impl IntoProtobufValue for Value {
    fn into_protobuf_value(self) -> Value {
        self
    }
}

impl IntoProtobufValue for &str {
    fn into_protobuf_value(self) -> Value {
        Value {
            kind: Some(Kind::StringValue(self.to_owned())),
        }
    }
}

impl IntoProtobufValue for String {
    fn into_protobuf_value(self) -> Value {
        Value {
            kind: Some(Kind::StringValue(self)),
        }
    }
}

impl IntoProtobufValue for bool {
    fn into_protobuf_value(self) -> Value {
        Value {
            kind: Some(Kind::BoolValue(self)),
        }
    }
}

impl IntoProtobufValue for i64 {
    // protobuf numbers are doubles; IDs beyond 2^53 lose precision
    #[allow(clippy::cast_precision_loss)]
    fn into_protobuf_value(self) -> Value {
        Value {
            kind: Some(Kind::NumberValue(self as f64)),
        }
    }
}

impl<T> IntoProtobufValue for Vec<T>
where
    T: IntoProtobufValue,
{
    fn into_protobuf_value(self) -> Value {
        Value {
            kind: Some(Kind::ListValue(ListValue {
                values: self
                    .into_iter()
                    .map(IntoProtobufValue::into_protobuf_value)
                    .collect(),
            })),
        }
    }
}

impl IntoProtobufValue for Struct {
    fn into_protobuf_value(self) -> Value {
        Value {
            kind: Some(Kind::StructValue(self)),
        }
    }
}

/// Why a value in an answer did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shape {
    /// The entry is absent.
    Missing(&'static str),
    /// The entry exists but has the wrong type.
    Mismatch(&'static str, &'static str),
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(key) => write!(f, "`{key}` is missing"),
            Self::Mismatch(key, expected) => write!(f, "`{key}` is not {expected}"),
        }
    }
}

/// The entry `key` of `map` as a string.
pub(crate) fn string_entry(map: &Struct, key: &'static str) -> Result<String, Shape> {
    match map.fields.get(key).and_then(|value| value.kind.as_ref()) {
        Some(Kind::StringValue(value)) => Ok(value.clone()),
        Some(_) => Err(Shape::Mismatch(key, "a string")),
        None => Err(Shape::Missing(key)),
    }
}

/// The entry `key` of `map` as a string, if present.
pub(crate) fn optional_string_entry(
    map: &Struct,
    key: &'static str,
) -> Result<Option<String>, Shape> {
    match string_entry(map, key) {
        Ok(value) => Ok(Some(value)),
        Err(Shape::Missing(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// The entry `key` of `map` as an integer, if present.
pub(crate) fn optional_int_entry(map: &Struct, key: &'static str) -> Result<Option<i64>, Shape> {
    match map.fields.get(key).and_then(|value| value.kind.as_ref()) {
        #[allow(clippy::cast_possible_truncation)]
        Some(Kind::NumberValue(value)) if value.fract() == 0.0 => Ok(Some(*value as i64)),
        Some(_) => Err(Shape::Mismatch(key, "an integer")),
        None => Ok(None),
    }
}

/// The entry `key` of `map` as a list.
pub(crate) fn list_entry<'a>(map: &'a Struct, key: &'static str) -> Result<&'a [Value], Shape> {
    match map.fields.get(key).and_then(|value| value.kind.as_ref()) {
        Some(Kind::ListValue(ListValue { values })) => Ok(values),
        Some(_) => Err(Shape::Mismatch(key, "a list")),
        None => Err(Shape::Missing(key)),
    }
}

/// Every element of `values` as a string.
pub(crate) fn strings(values: &[Value], key: &'static str) -> Result<Vec<String>, Shape> {
    values
        .iter()
        .map(|value| match &value.kind {
            Some(Kind::StringValue(value)) => Ok(value.clone()),
            _ => Err(Shape::Mismatch(key, "a list of strings")),
        })
        .collect()
}
