//! # Metadata Values
//!
//! Free-form metadata attached to API objects, as an explicit tagged tree.
//! Renderers match on the variant instead of poking at an untyped value.

use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<MetaValue>),
    /// Entries in source order.
    Object(Vec<(String, MetaValue)>),
}

impl MetaValue {
    /// Renders on a single line (scalars and empty collections).
    pub fn is_inline(&self) -> bool {
        match self {
            MetaValue::Array(items) => items.is_empty(),
            MetaValue::Object(entries) => entries.is_empty(),
            _ => true,
        }
    }
}

impl From<Value> for MetaValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => MetaValue::Null,
            Value::Bool(b) => MetaValue::Bool(b),
            Value::Number(n) => MetaValue::Number(n),
            Value::String(s) => MetaValue::String(s),
            Value::Array(items) => MetaValue::Array(items.into_iter().map(MetaValue::from).collect()),
            Value::Object(map) => MetaValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, MetaValue::from(value)))
                    .collect(),
            ),
        }
    }
}
