//! Cast command implementation

use super::output::OutputFormat;
use super::{output, registry};
use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;
use typecast_engine::{BehaviorMode, CoercionEngine};
use typecast_types::Value;

/// Configuration for cast command
pub struct CastConfig {
    /// Value to cast, as JSON unless `raw` is set
    pub value: String,
    /// Target type or class name
    pub target: String,
    /// Treat `value` as a plain string
    pub raw: bool,
    pub classes: Option<PathBuf>,
    pub mode: Option<BehaviorMode>,
    pub verbose: bool,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Parse the command-line value
pub fn parse_value(text: &str, raw: bool) -> Result<Value> {
    if raw {
        return Ok(Value::string(text));
    }
    let json: serde_json::Value = serde_json::from_str(text)
        .with_context(|| format!("Failed to parse value as JSON: {} (use --raw for plain text)", text))?;
    Ok(Value::from_json(json)?)
}

/// Cast the configured value and render the result
pub fn render_cast(config: &CastConfig) -> Result<String> {
    let input = parse_value(&config.value, config.raw)?;
    let registry = registry::load_registry(config.classes.as_deref())?;

    let mut engine = CoercionEngine::with_registry(registry);
    if let Some(mode) = config.mode {
        engine = engine.with_mode(mode);
    }

    if config.verbose {
        eprintln!(
            "Casting {} value {} to {}",
            input.type_name(),
            input.render(),
            config.target
        );
    }

    let result = engine
        .cast(input.clone(), &config.target)
        .with_context(|| format!("Failed to cast {} to {}", input.render(), config.target))?;

    if config.format.is_json() {
        let report = json!({
            "input": input.to_json(),
            "inputType": input.type_name(),
            "target": config.target,
            "result": result.to_json(),
            "resultType": result.type_name(),
        });
        output::format_json(&report, config.format)
    } else {
        Ok(format!("{} ({})", result.render(), result.type_name()))
    }
}

/// Execute the cast command
pub fn cast(config: CastConfig) -> Result<()> {
    let content = render_cast(&config)?;
    output::write_output(&content, config.output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn config(value: &str, target: &str) -> CastConfig {
        CastConfig {
            value: value.to_string(),
            target: target.to_string(),
            raw: false,
            classes: None,
            mode: Some(BehaviorMode::CheckAndCast),
            verbose: false,
            format: OutputFormat::Text,
            output_file: None,
        }
    }

    #[rstest]
    #[case(r#""42""#, "int", "42 (integer)")]
    #[case("3", "float", "3 (float)")]
    #[case(r#""""#, "int", "null (null)")]
    #[case("true", "string", "1 (string)")]
    #[case(r#"{"$markup": "yes"}"#, "bool", "true (boolean)")]
    fn test_render_text(#[case] value: &str, #[case] target: &str, #[case] expected: &str) {
        assert_eq!(render_cast(&config(value, target)).unwrap(), expected);
    }

    #[test]
    fn test_render_json() {
        let mut config = config(r#""2.50""#, "double");
        config.format = OutputFormat::Json;

        let rendered: serde_json::Value =
            serde_json::from_str(&render_cast(&config).unwrap()).unwrap();
        assert_eq!(rendered["result"], json!(2.5));
        assert_eq!(rendered["resultType"], json!("float"));
        assert_eq!(rendered["inputType"], json!("string"));
    }

    #[test]
    fn test_raw_values_are_strings() {
        let mut config = config("007", "int");
        config.raw = true;
        assert_eq!(render_cast(&config).unwrap(), "007 (string)");
    }

    #[test]
    fn test_failure_keeps_coercion_error() {
        let err = render_cast(&config("true", "int")).unwrap_err();
        let coercion = err
            .chain()
            .find_map(|e| e.downcast_ref::<typecast_diagnostics::CoercionError>())
            .unwrap();
        assert_eq!(coercion.code(), typecast_diagnostics::TC0102);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = render_cast(&config("not json", "int")).unwrap_err();
        assert!(err.to_string().contains("--raw"));
    }
}
