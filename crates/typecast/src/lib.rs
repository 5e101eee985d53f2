//! Runtime type coercion for loosely typed values
//!
//! This crate bundles the typecast workspace:
//! - Type tags, alias resolution and the host value model
//! - A class registry for host class hierarchies
//! - The coercion engine and its behavior modes
//! - Structured diagnostics
//!
//! # Example
//!
//! ```ignore
//! use typecast::{CoercionEngine, Value};
//!
//! let engine = CoercionEngine::new();
//! assert_eq!(engine.cast("2.50", "double")?, Value::Float(2.5));
//! assert_eq!(engine.cast("", "int")?, Value::Null);
//! ```

// Re-export all public APIs from internal crates
pub use typecast_diagnostics as diagnostics;
pub use typecast_engine as engine;
pub use typecast_model as model;
pub use typecast_types as types;

// Convenience re-exports
pub use typecast_diagnostics::{CoercionError, ErrorCode, Result};
pub use typecast_engine::{
    behavior_mode, cast, set_behavior_mode, BehaviorMode, CoercionEngine, ModeGuard,
};
pub use typecast_model::{ClassDecl, ClassRegistry};
pub use typecast_types::{resolve_alias, CastTarget, ObjectValue, TypeRegistry, TypeTag, Value};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
