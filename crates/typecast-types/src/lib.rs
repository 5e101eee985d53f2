//! Typecast type system
//!
//! This crate defines the vocabulary shared by the coercion engine and its hosts:
//! - Type tags and cast targets
//! - Alias resolution for free-text type names
//! - The runtime value model, including adapter objects
//! - The reflective type registry seam
//! - A JSON bridge for feeding host values in and out

pub mod aliases;
pub mod json;
pub mod object;
pub mod registry;
pub mod type_system;
pub mod value;

pub use aliases::{aliases_of, lookup_alias, resolve_alias, ALIASES};
pub use object::*;
pub use registry::*;
pub use type_system::*;
pub use value::*;
