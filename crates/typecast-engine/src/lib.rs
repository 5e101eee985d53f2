//! Typecast Coercion Engine
//!
//! This crate converts loosely typed host values to a requested type, or
//! rejects the conversion when it would be lossy or meaningless:
//!
//! - **Scalars**: boolean, integer, float and string conversions checked by
//!   converting back and comparing with the original
//! - **Objects**: class and interface compatibility, markup elements unwrapped
//!   to their text, closures refused as callables
//! - **Arrays**: passed through, or validated as `[object, method]` and
//!   `[class, static method]` callables
//! - **Resources**: never cast
//!
//! # Example
//!
//! ```ignore
//! use typecast_engine::{CoercionEngine, Value};
//!
//! let engine = CoercionEngine::new();
//! assert_eq!(engine.cast("42", "int")?, Value::Integer(42));
//! assert!(engine.cast(true, "int").is_err());
//! ```
//!
//! # Behavior modes
//!
//! Every cast first reads the behavior mode. `NoOp` returns the input
//! unchanged, `CheckAndCast` validates and converts, and the reserved
//! `CastOnly` / `CheckOnly` modes fail with a not-implemented error. The mode
//! is process-wide unless an engine pins its own with
//! [`CoercionEngine::with_mode`].

pub mod behavior;
pub mod coercers;
pub mod engine;
pub mod error;

#[cfg(test)]
mod mock;

pub use behavior::{
    behavior_mode, set_behavior_code, set_behavior_mode, BehaviorMode, ModeGuard,
};
pub use coercers::value::{is_integer_text, is_numeric, truthiness, FLOAT_EPSILON};
pub use engine::{cast, CoercionEngine};
pub use error::{CastResult, CoercionError, ErrorKind, Result};
pub use typecast_types::{CastTarget, ObjectValue, TypeTag, Value};
