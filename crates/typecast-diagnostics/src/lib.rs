//! Typecast diagnostics and error handling
//!
//! This crate provides the error handling infrastructure for the coercion
//! engine, including error codes and boundary-level diagnostic reporting.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for typecast operations
pub type Result<T> = std::result::Result<T, CoercionError>;
