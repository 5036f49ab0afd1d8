//! Typed attribute values.
//!
//! Records, resources, and scopes carry attribute collections whose values
//! are recursively structured: scalars, nested maps, ordered arrays, and a
//! distinguished empty marker. The variant set is closed — every consumer
//! matches exhaustively, so growing it is a compile-time event, never a
//! silent default branch.

use std::collections::BTreeMap;

/// A string-keyed attribute collection.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// One attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// UTF-8 string.
    Str(String),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Double(f64),
    /// Boolean.
    Bool(bool),
    /// Nested attribute collection.
    Map(AttributeMap),
    /// Ordered sequence of values.
    Array(Vec<AttributeValue>),
    /// Explicitly empty value.
    Empty,
}

impl Default for AttributeValue {
    fn default() -> Self {
        AttributeValue::Empty
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Str(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(values: Vec<AttributeValue>) -> Self {
        AttributeValue::Array(values)
    }
}

impl From<AttributeMap> for AttributeValue {
    fn from(entries: AttributeMap) -> Self {
        AttributeValue::Map(entries)
    }
}
