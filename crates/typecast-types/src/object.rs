//! Host object representations
//!
//! Objects reaching the engine are one of a small closed set of variants.
//! Adapter objects (markup wrappers, closures, date-times) get their own
//! variant so the coercers can match on them; everything else is an opaque
//! [`HostObject`] instance.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Built-in class name of markup wrapper objects
pub const MARKUP_CLASS: &str = "MarkupElement";
/// Built-in class name of anonymous functions
pub const CLOSURE_CLASS: &str = "Closure";
/// Built-in class name of date-time objects
pub const DATETIME_CLASS: &str = "DateTime";

/// Capabilities the engine needs from an arbitrary host object
pub trait HostObject: fmt::Debug + Send + Sync {
    /// Concrete runtime class of this object
    fn class_name(&self) -> &str;

    /// String conversion capability, if the object has one
    fn to_display_string(&self) -> Option<String> {
        None
    }

    /// Does the object expose an instance method with this name
    fn has_method(&self, _name: &str) -> bool {
        false
    }

    /// Can the object itself be invoked
    fn is_invocable(&self) -> bool {
        false
    }
}

/// A generic host object described by data rather than code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicObject {
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub methods: SmallVec<[String; 4]>,
    #[serde(default)]
    pub invocable: bool,
}

impl DynamicObject {
    /// Create an object of the given class with no capabilities
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            display: None,
            methods: SmallVec::new(),
            invocable: false,
        }
    }

    /// Give the object a string conversion
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Add an instance method
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.methods.push(method.into());
        self
    }

    /// Make the object itself invocable
    pub fn invocable(mut self) -> Self {
        self.invocable = true;
        self
    }
}

impl HostObject for DynamicObject {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn to_display_string(&self) -> Option<String> {
        self.display.clone()
    }

    fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(name))
    }

    fn is_invocable(&self) -> bool {
        self.invocable
    }
}

/// A markup element wrapping a scalar text payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupElement {
    pub tag: String,
    pub text: String,
}

impl MarkupElement {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

/// An anonymous function. Closures cannot be serialized by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Closure {
    pub label: Option<String>,
}

impl Closure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

/// An opaque host handle (file, socket, stream)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceHandle {
    pub kind: String,
    pub id: u64,
}

impl ResourceHandle {
    pub fn new(kind: impl Into<String>, id: u64) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource({}#{})", self.kind, self.id)
    }
}

/// An object instance as seen by the coercion engine
#[derive(Debug, Clone)]
pub enum ObjectValue {
    /// Scalar-wrapping markup adapter
    Markup(MarkupElement),
    /// Anonymous function
    Closure(Closure),
    /// Date-time object
    DateTime(DateTime<FixedOffset>),
    /// Any other host object
    Instance(Arc<dyn HostObject>),
}

impl ObjectValue {
    /// Wrap a host object
    pub fn instance(object: impl HostObject + 'static) -> Self {
        Self::Instance(Arc::new(object))
    }

    /// Concrete runtime class of this object
    pub fn class_name(&self) -> &str {
        match self {
            Self::Markup(_) => MARKUP_CLASS,
            Self::Closure(_) => CLOSURE_CLASS,
            Self::DateTime(_) => DATETIME_CLASS,
            Self::Instance(object) => object.class_name(),
        }
    }

    /// String conversion capability, if any
    pub fn to_display_string(&self) -> Option<String> {
        match self {
            Self::Markup(element) => Some(element.text.clone()),
            Self::Closure(_) => None,
            Self::DateTime(dt) => Some(dt.to_rfc3339()),
            Self::Instance(object) => object.to_display_string(),
        }
    }

    /// Does the object expose an instance method with this name
    pub fn has_method(&self, name: &str) -> bool {
        match self {
            Self::Instance(object) => object.has_method(name),
            _ => false,
        }
    }

    /// Can the object itself be invoked
    pub fn is_invocable(&self) -> bool {
        match self {
            Self::Closure(_) => true,
            Self::Instance(object) => object.is_invocable(),
            Self::Markup(_) | Self::DateTime(_) => false,
        }
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Markup(a), Self::Markup(b)) => a == b,
            (Self::Closure(a), Self::Closure(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            // Instances compare by identity
            (Self::Instance(a), Self::Instance(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_object_capabilities() {
        let obj = DynamicObject::new("Invoice")
            .with_display("INV-7")
            .with_method("total");

        assert_eq!(obj.class_name(), "Invoice");
        assert_eq!(obj.to_display_string().as_deref(), Some("INV-7"));
        assert!(obj.has_method("Total"));
        assert!(!obj.has_method("missing"));
        assert!(!obj.is_invocable());
    }

    #[test]
    fn test_builtin_class_names() {
        let markup = ObjectValue::Markup(MarkupElement::new("qty", "3"));
        assert_eq!(markup.class_name(), MARKUP_CLASS);
        assert_eq!(markup.to_display_string().as_deref(), Some("3"));

        let closure = ObjectValue::Closure(Closure::new());
        assert_eq!(closure.class_name(), CLOSURE_CLASS);
        assert!(closure.is_invocable());
        assert!(closure.to_display_string().is_none());
    }

    #[test]
    fn test_instances_compare_by_identity() {
        let a = ObjectValue::instance(DynamicObject::new("A"));
        let b = ObjectValue::instance(DynamicObject::new("A"));

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
