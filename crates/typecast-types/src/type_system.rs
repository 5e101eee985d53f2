//! Typecast Type System
//!
//! This module defines the closed set of coercion targets:
//! - TypeTag enum naming every canonical type category
//! - CastTarget, either a tag or an externally registered class name
//! - Constant and SOAP renderings used by code generators

use serde::{Deserialize, Serialize};
use std::fmt;
use typecast_diagnostics::{CoercionError, Result, TC0002, TC0003};

/// Canonical type category used as a coercion target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// Text
    String,
    /// Native signed integer
    Integer,
    /// Double precision float
    Float,
    /// true/false
    Boolean,
    /// Ordered collection
    Array,
    /// Any object instance
    Object,
    /// Something that can be invoked
    Callable,
    /// Opaque host handle
    Resource,
    /// Calendar date and time
    DateTime,
    /// Absence of a value
    Void,
}

impl TypeTag {
    /// Every tag, in declaration order
    pub const ALL: [TypeTag; 10] = [
        Self::String,
        Self::Integer,
        Self::Float,
        Self::Boolean,
        Self::Array,
        Self::Object,
        Self::Callable,
        Self::Resource,
        Self::DateTime,
        Self::Void,
    ];

    /// Get the canonical lowercase name, as used in error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Callable => "callable",
            Self::Resource => "resource",
            Self::DateTime => "datetime",
            Self::Void => "void",
        }
    }

    /// Get the code-generation constant text for this tag
    ///
    /// Only tags that can describe a stored field have a constant form.
    pub fn constant_name(&self) -> Result<&'static str> {
        match self {
            Self::Object => Ok("Type::Object"),
            Self::String => Ok("Type::String"),
            Self::Integer => Ok("Type::Integer"),
            Self::Float => Ok("Type::Float"),
            Self::Boolean => Ok("Type::Boolean"),
            Self::Array => Ok("Type::ArrayType"),
            Self::Resource => Ok("Type::Resource"),
            Self::DateTime => Ok("Type::DateTime"),
            Self::Callable | Self::Void => Err(CoercionError::invalid_cast(
                TC0002,
                self.name(),
                "constant",
                format!(
                    "Unable to determine type of item to lookup its constant: {}",
                    self.name()
                ),
            )),
        }
    }

    /// Get the SOAP `s:type` name for this tag
    pub fn soap_type(&self) -> Result<&'static str> {
        match self {
            Self::String => Ok("string"),
            Self::Integer => Ok("int"),
            Self::Float => Ok("float"),
            Self::Boolean => Ok("boolean"),
            Self::DateTime => Ok("dateTime"),
            _ => Err(CoercionError::invalid_cast(
                TC0003,
                self.name(),
                "soap",
                format!(
                    "Unable to determine type of item to lookup its SOAP type: {}",
                    self.name()
                ),
            )),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved coercion target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum CastTarget {
    /// A built-in type category
    Tag(TypeTag),
    /// A class or interface known to the type registry
    Class(String),
}

impl CastTarget {
    /// Create a class target
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Get the tag, if this target is one
    pub fn tag(&self) -> Option<TypeTag> {
        match self {
            Self::Tag(tag) => Some(*tag),
            Self::Class(_) => None,
        }
    }

    /// Check if this target is the given tag
    pub fn is(&self, tag: TypeTag) -> bool {
        self.tag() == Some(tag)
    }

    /// Get the display name of this target
    pub fn name(&self) -> &str {
        match self {
            Self::Tag(tag) => tag.name(),
            Self::Class(name) => name,
        }
    }
}

impl From<TypeTag> for CastTarget {
    fn from(tag: TypeTag) -> Self {
        Self::Tag(tag)
    }
}

impl fmt::Display for CastTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(TypeTag::Float.to_string(), "float");
        assert_eq!(TypeTag::DateTime.name(), "datetime");
        assert_eq!(TypeTag::ALL.len(), 10);
    }

    #[test]
    fn test_constant_names() {
        assert_eq!(TypeTag::Array.constant_name().unwrap(), "Type::ArrayType");
        assert_eq!(TypeTag::DateTime.constant_name().unwrap(), "Type::DateTime");
        assert!(TypeTag::Callable.constant_name().is_err());
        assert!(TypeTag::Void.constant_name().is_err());
    }

    #[test]
    fn test_soap_types() {
        assert_eq!(TypeTag::Integer.soap_type().unwrap(), "int");
        assert_eq!(TypeTag::DateTime.soap_type().unwrap(), "dateTime");

        let err = TypeTag::Array.soap_type().unwrap_err();
        assert_eq!(err.code(), TC0003);
    }

    #[test]
    fn test_cast_target() {
        let target = CastTarget::from(TypeTag::Integer);
        assert!(target.is(TypeTag::Integer));
        assert_eq!(target.to_string(), "integer");

        let class = CastTarget::class("Invoice");
        assert_eq!(class.tag(), None);
        assert_eq!(class.name(), "Invoice");
    }
}
