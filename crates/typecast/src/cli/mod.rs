//! CLI functionality for the typecast tool
//!
//! This module contains all CLI-related functionality including:
//! - Casting JSON-encoded values
//! - Resolving type names
//! - Listing the alias table
//! - Class registry loading
//! - Output formatting

pub mod aliases;
pub mod cast;
pub mod output;
pub mod registry;
pub mod resolve;
