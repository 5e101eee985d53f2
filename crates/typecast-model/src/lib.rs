//! Typecast class model
//!
//! This crate provides:
//! - Class and interface declarations with parent/interface chains
//! - A shareable class registry implementing `TypeRegistry`
//! - JSON loading of class declarations

pub mod class_info;
pub mod registry;

pub use class_info::*;
pub use registry::*;
