//! Aliases command implementation

use super::output::{self, format_field, OutputFormat};
use anyhow::{anyhow, Result};
use serde_json::{json, Value as Json};
use std::path::PathBuf;
use typecast_types::{aliases_of, lookup_alias, TypeTag};

/// Configuration for aliases command
pub struct AliasesConfig {
    /// Only list synonyms of the type this name resolves to
    pub filter: Option<String>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Render the alias table
pub fn render_aliases(config: &AliasesConfig) -> Result<String> {
    let tags: Vec<TypeTag> = match &config.filter {
        Some(name) => {
            let tag = lookup_alias(name).ok_or_else(|| anyhow!("Not a built-in type name: {}", name))?;
            vec![tag]
        }
        None => TypeTag::ALL.to_vec(),
    };

    if config.format.is_json() {
        let rows: Vec<Json> = tags
            .iter()
            .map(|tag| json!({"type": tag.name(), "aliases": aliases_of(*tag).collect::<Vec<_>>()}))
            .collect();
        return output::format_json(&Json::Array(rows), config.format);
    }

    Ok(tags
        .iter()
        .map(|tag| format_field(tag.name(), aliases_of(*tag).collect::<Vec<_>>().join(", ")))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Execute the aliases command
pub fn aliases(config: AliasesConfig) -> Result<()> {
    let content = render_aliases(&config)?;
    output::write_output(&content, config.output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_json() {
        let config = AliasesConfig {
            filter: Some("DBL".to_string()),
            format: OutputFormat::Json,
            output_file: None,
        };
        let rendered: Json = serde_json::from_str(&render_aliases(&config).unwrap()).unwrap();
        assert_eq!(rendered[0]["type"], json!("float"));
        assert_eq!(
            rendered[0]["aliases"],
            json!(["float", "flt", "double", "dbl", "single", "decimal"])
        );
    }

    #[test]
    fn test_every_type_listed() {
        colored::control::set_override(false);
        let config = AliasesConfig {
            filter: None,
            format: OutputFormat::Text,
            output_file: None,
        };
        let text = render_aliases(&config).unwrap();
        assert_eq!(text.lines().count(), TypeTag::ALL.len());
        assert!(text.contains("boolean bool, boolean, bit"));
    }

    #[test]
    fn test_unknown_filter() {
        let config = AliasesConfig {
            filter: Some("Invoice".to_string()),
            format: OutputFormat::Text,
            output_file: None,
        };
        assert!(render_aliases(&config).is_err());
    }
}
