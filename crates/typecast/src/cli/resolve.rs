//! Resolve command implementation
//!
//! Shows what a free-text type name resolves to, with its constant and SOAP
//! forms for built-in types, or its ancestors for registered classes.

use super::output::{self, OutputFormat};
use super::registry;
use anyhow::{Context, Result};
use serde_json::{json, Value as Json};
use std::path::PathBuf;
use typecast_model::ClassRegistry;
use typecast_types::{aliases_of, resolve_alias, CastTarget};

/// Configuration for resolve command
pub struct ResolveConfig {
    pub names: Vec<String>,
    pub classes: Option<PathBuf>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Describe one resolved name
fn describe(name: &str, registry: &ClassRegistry) -> Result<Json> {
    let target = resolve_alias(name, registry)
        .with_context(|| format!("Failed to resolve type name '{}'", name))?;

    let entry = match &target {
        CastTarget::Tag(tag) => json!({
            "name": name,
            "kind": "type",
            "type": tag.name(),
            "constant": tag.constant_name().ok(),
            "soap": tag.soap_type().ok(),
            "aliases": aliases_of(*tag).collect::<Vec<_>>(),
        }),
        CastTarget::Class(class) => json!({
            "name": name,
            "kind": "class",
            "type": class,
            "ancestors": registry.ancestors(class),
        }),
    };
    Ok(entry)
}

fn text_line(entry: &Json) -> String {
    let field = |key: &str| entry[key].as_str().unwrap_or("-").to_string();
    let list = |key: &str| {
        entry[key]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(Json::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    };

    if entry["kind"] == "class" {
        format!(
            "{} -> class {} [{}]",
            field("name"),
            field("type"),
            list("ancestors")
        )
    } else {
        format!(
            "{} -> {} (constant: {}, soap: {})",
            field("name"),
            field("type"),
            field("constant"),
            field("soap")
        )
    }
}

/// Resolve every configured name and render the result
pub fn render_resolve(config: &ResolveConfig) -> Result<String> {
    let registry = registry::load_registry(config.classes.as_deref())?;
    let entries = config
        .names
        .iter()
        .map(|name| describe(name, &registry))
        .collect::<Result<Vec<_>>>()?;

    if config.format.is_json() {
        output::format_json(&Json::Array(entries), config.format)
    } else {
        Ok(entries.iter().map(text_line).collect::<Vec<_>>().join("\n"))
    }
}

/// Execute the resolve command
pub fn resolve(config: ResolveConfig) -> Result<()> {
    let content = render_resolve(&config)?;
    output::write_output(&content, config.output_file.as_deref())
}
