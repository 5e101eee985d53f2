//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value as Json;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use typecast_diagnostics::CoercionError;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    JsonPretty,
    #[default]
    Text,
}

impl OutputFormat {
    /// Parse a format name, falling back to plain text
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" | "json-pretty" => Self::JsonPretty,
            _ => Self::Text,
        }
    }

    /// Check if this format produces JSON
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::JsonPretty)
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stdout().is_terminal()),
    }
}

/// Format an error for display
///
/// Coercion errors anywhere in the chain are shown as diagnostics.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.chain().find_map(|e| e.downcast_ref::<CoercionError>()) {
        Some(coercion) => coercion.to_diagnostic().to_colored_string(),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Format a label/value line for text output
pub fn format_field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:>10} {}", label.cyan(), value)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &Json, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::JsonPretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}
