//! Reflective type registry seam
//!
//! The engine never inspects classes itself. Everything it needs to know about
//! host classes, interfaces and functions goes through [`TypeRegistry`].

/// Reflective capability over the host's class hierarchy
pub trait TypeRegistry: Send + Sync {
    /// Does a class or interface with this name exist
    fn class_exists(&self, name: &str) -> bool;

    /// Is `class` the same as, a descendant of, or an implementor of `ancestor`
    fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool;

    /// Does a free function with this name exist
    fn function_exists(&self, _name: &str) -> bool {
        false
    }

    /// Does `class` expose a static method named `method`
    fn static_method_exists(&self, _class: &str, _method: &str) -> bool {
        false
    }
}

/// A registry that knows no classes at all
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRegistry;

impl TypeRegistry for EmptyRegistry {
    fn class_exists(&self, _name: &str) -> bool {
        false
    }

    fn is_subclass_of(&self, _class: &str, _ancestor: &str) -> bool {
        false
    }
}
