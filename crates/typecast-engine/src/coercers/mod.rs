//! Coercers for each runtime category
//!
//! Each submodule adds methods to [`crate::CoercionEngine`]:
//!
//! - `value`: scalar to scalar, with round-trip safety checks
//! - `object`: objects to scalars or classes, including adapter objects
//! - `collection`: arrays, either passed through or checked as callables

pub mod collection;
pub mod object;
pub mod value;
