//! Typecast error codes following a structured numbering system
//!
//! Error code ranges:
//! - TC0001-TC0099: Type resolution errors (aliases, class names, type tags)
//! - TC0100-TC0199: Cast errors (lossy or illegal conversions)
//! - TC0200-TC0299: Behavior errors (strictness mode, configuration)
//! - TC0300-TC0399: Host input errors (JSON bridge, registry loading)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a type resolution error (0001-0099)
    pub const fn is_resolution_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a cast error (0100-0199)
    pub const fn is_cast_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a behavior error (0200-0299)
    pub const fn is_behavior_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a host input error (0300-0399)
    pub const fn is_input_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TC{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Type resolution errors (0001-0099)
    map.insert(1, ErrorInfo::new("Unknown type or class name")
        .with_help("Use a built-in alias such as 'int' or 'bool', or register the class first"));
    map.insert(2, ErrorInfo::new("Type has no constant form"));
    map.insert(3, ErrorInfo::new("Type has no SOAP form"));

    // Cast errors (0100-0199)
    map.insert(100, ErrorInfo::new("Invalid cast"));
    map.insert(101, ErrorInfo::new("Lossy numeric conversion")
        .with_help("The converted value does not reproduce the original"));
    map.insert(102, ErrorInfo::new("Boolean has no numeric form"));
    map.insert(103, ErrorInfo::new("Invalid float"));
    map.insert(104, ErrorInfo::new("Incompatible object class")
        .with_help("An object only casts to its own class or one of its ancestors"));
    map.insert(105, ErrorInfo::new("Closure used as callable")
        .with_help("Closures cannot be persisted; pass a named function or an [object, method] pair"));
    map.insert(106, ErrorInfo::new("Not invocable"));
    map.insert(107, ErrorInfo::new("Collection cannot be cast"));
    map.insert(108, ErrorInfo::new("Resources cannot be cast"));

    // Behavior errors (0200-0299)
    map.insert(200, ErrorInfo::new("Behavior mode not implemented")
        .with_help("Only NoOp and CheckAndCast have defined semantics"));
    map.insert(201, ErrorInfo::new("Unknown behavior mode"));

    // Host input errors (0300-0399)
    map.insert(300, ErrorInfo::new("Invalid host value"));
    map.insert(301, ErrorInfo::new("Class registry load failed"));

    map
});

// Type resolution errors
pub const TC0001: ErrorCode = ErrorCode::new(1);
pub const TC0002: ErrorCode = ErrorCode::new(2);
pub const TC0003: ErrorCode = ErrorCode::new(3);

// Cast errors
pub const TC0100: ErrorCode = ErrorCode::new(100);
pub const TC0101: ErrorCode = ErrorCode::new(101);
pub const TC0102: ErrorCode = ErrorCode::new(102);
pub const TC0103: ErrorCode = ErrorCode::new(103);
pub const TC0104: ErrorCode = ErrorCode::new(104);
pub const TC0105: ErrorCode = ErrorCode::new(105);
pub const TC0106: ErrorCode = ErrorCode::new(106);
pub const TC0107: ErrorCode = ErrorCode::new(107);
pub const TC0108: ErrorCode = ErrorCode::new(108);

// Behavior errors
pub const TC0200: ErrorCode = ErrorCode::new(200);
pub const TC0201: ErrorCode = ErrorCode::new(201);

// Host input errors
pub const TC0300: ErrorCode = ErrorCode::new(300);
pub const TC0301: ErrorCode = ErrorCode::new(301);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(TC0001.to_string(), "TC0001");
        assert_eq!(TC0108.to_string(), "TC0108");
    }

    #[test]
    fn test_error_categories() {
        assert!(TC0001.is_resolution_error());
        assert!(!TC0001.is_cast_error());

        assert!(TC0100.is_cast_error());
        assert!(!TC0100.is_resolution_error());

        assert!(TC0200.is_behavior_error());
        assert!(TC0300.is_input_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(TC0100.info().description, "Invalid cast");
        assert!(TC0105.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
