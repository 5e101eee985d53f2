//! Typecast error types

use crate::{ErrorCode, TC0100, TC0200, TC0201, TC0300};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the cast cannot proceed
    Error,
    /// Warning - the cast succeeded but deserves attention
    Warning,
    /// Information - informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message reported at a binding boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Offending value, rendered for display
    pub value: Option<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            value: None,
            help: code.info().help.map(str::to_string),
        }
    }

    /// Attach the offending value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn to_colored_string(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
            Severity::Info => self.severity.to_string().cyan().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code, self.message);
        if let Some(value) = &self.value {
            out.push_str(&format!("\n  {} {}", "value:".dimmed(), value));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(value) = &self.value {
            write!(f, " (value: {})", value)?;
        }
        Ok(())
    }
}

/// Broad failure category of a [`CoercionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidCast,
    NotImplemented,
    Configuration,
    Input,
}

/// Main typecast error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// The source/target combination is not convertible
    #[error("{code}: {message}")]
    InvalidCast {
        code: ErrorCode,
        message: String,
        source_type: String,
        target_type: String,
        value: Option<String>,
    },

    /// The active behavior mode has no defined semantics
    #[error("{code}: {mode} handling not yet implemented")]
    NotImplemented { code: ErrorCode, mode: String },

    /// The behavior mode holds a value outside the enumeration
    #[error("{code}: {message}")]
    Configuration { code: ErrorCode, message: String },

    /// A host value or registry document could not be understood
    #[error("{code}: {message}")]
    Input { code: ErrorCode, message: String },
}

impl CoercionError {
    /// Create an invalid cast error
    pub fn invalid_cast(
        code: ErrorCode,
        source_type: impl Into<String>,
        target_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidCast {
            code,
            message: message.into(),
            source_type: source_type.into(),
            target_type: target_type.into(),
            value: None,
        }
    }

    /// Create the generic "unable to cast" error used by the coercers
    pub fn unable_to_cast(
        source_type: impl Into<String>,
        target_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let source_type = source_type.into();
        let target_type = target_type.into();
        let value = value.into();
        Self::InvalidCast {
            code: TC0100,
            message: format!(
                "Unable to cast {} value to {}: {}",
                source_type, target_type, value
            ),
            source_type,
            target_type,
            value: Some(value),
        }
    }

    /// Create a not-implemented error for a behavior mode
    pub fn not_implemented(mode: impl Into<String>) -> Self {
        Self::NotImplemented {
            code: TC0200,
            mode: mode.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            code: TC0201,
            message: message.into(),
        }
    }

    /// Create a host input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            code: TC0300,
            message: message.into(),
        }
    }

    /// Create a host input error with a specific code
    pub fn input_with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
        }
    }

    /// Attach the offending value to an invalid cast error
    pub fn with_value(mut self, rendered: impl Into<String>) -> Self {
        if let Self::InvalidCast { value, .. } = &mut self {
            *value = Some(rendered.into());
        }
        self
    }

    /// Replace the error code, keeping the message
    pub fn with_code(mut self, new_code: ErrorCode) -> Self {
        match &mut self {
            Self::InvalidCast { code, .. }
            | Self::NotImplemented { code, .. }
            | Self::Configuration { code, .. }
            | Self::Input { code, .. } => *code = new_code,
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCast { code, .. } => *code,
            Self::NotImplemented { code, .. } => *code,
            Self::Configuration { code, .. } => *code,
            Self::Input { code, .. } => *code,
        }
    }

    /// Get the failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCast { .. } => ErrorKind::InvalidCast,
            Self::NotImplemented { .. } => ErrorKind::NotImplemented,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Input { .. } => ErrorKind::Input,
        }
    }

    /// Check if this is an invalid cast
    pub fn is_invalid_cast(&self) -> bool {
        matches!(self, Self::InvalidCast { .. })
    }

    /// Source and target type names, for invalid casts
    pub fn types(&self) -> Option<(&str, &str)> {
        match self {
            Self::InvalidCast {
                source_type,
                target_type,
                ..
            } => Some((source_type, target_type)),
            _ => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::InvalidCast {
                code,
                message,
                value,
                ..
            } => {
                let diag = Diagnostic::error(*code, message.clone());
                match value {
                    Some(v) => diag.with_value(v.clone()),
                    None => diag,
                }
            }
            Self::NotImplemented { code, mode } => {
                Diagnostic::error(*code, format!("{} handling not yet implemented", mode))
            }
            Self::Configuration { code, message } | Self::Input { code, message } => {
                Diagnostic::error(*code, message.clone())
            }
        }
    }
}
