//! Typecast Value types - runtime representation of loosely typed host values
//!
//! This module defines the Value enum handed to the coercion engine together
//! with the runtime categories the engine dispatches on.

use crate::object::{ObjectValue, ResourceHandle};
use crate::TypeTag;
use std::fmt;

/// A loosely typed host value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // === Scalars ===
    /// Absence of a value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Native 64-bit signed integer
    Integer(i64),
    /// Double precision float
    Float(f64),
    /// String value
    String(String),

    // === Compound ===
    /// Ordered list of values
    Array(Vec<Value>),
    /// Object instance
    Object(ObjectValue),
    /// Opaque host handle
    Resource(ResourceHandle),
}

/// Runtime category used for coercer dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Null,
    Scalar,
    Array,
    Object,
    Resource,
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the runtime category of this value
    pub fn category(&self) -> ValueCategory {
        match self {
            Self::Null => ValueCategory::Null,
            Self::Boolean(_) | Self::Integer(_) | Self::Float(_) | Self::String(_) => {
                ValueCategory::Scalar
            }
            Self::Array(_) => ValueCategory::Array,
            Self::Object(_) => ValueCategory::Object,
            Self::Resource(_) => ValueCategory::Resource,
        }
    }

    /// Get the type tag this value naturally belongs to
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Void,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Integer(_) => TypeTag::Integer,
            Self::Float(_) => TypeTag::Float,
            Self::String(_) => TypeTag::String,
            Self::Array(_) => TypeTag::Array,
            Self::Object(ObjectValue::DateTime(_)) => TypeTag::DateTime,
            Self::Object(_) => TypeTag::Object,
            Self::Resource(_) => TypeTag::Resource,
        }
    }

    /// Get the runtime type name used in error messages
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Object(object) => object.class_name(),
            other => other.type_tag().name(),
        }
    }

    /// Try to get as String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as Array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as Object
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an array value
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Render the value for diagnostics
    pub fn render(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => render_float(*f),
            Self::String(s) => s.clone(),
            Self::Array(items) => format!("Array({})", items.len()),
            Self::Object(object) => format!("{{{}}}", object.class_name()),
            Self::Resource(handle) => handle.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ObjectValue> for Value {
    fn from(value: ObjectValue) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// Host string form of a float
///
/// Finite values use the shortest representation that reads back to the same
/// float, with no trailing `.0` on integral values.
pub fn render_float(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "INF" } else { "-INF" }.to_string()
    } else {
        value.to_string()
    }
}
