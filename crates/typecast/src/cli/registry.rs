//! Class registry loading for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use typecast_model::ClassRegistry;

/// Environment variable naming a default class declaration file
pub const CLASSES_ENV: &str = "TYPECAST_CLASSES";

/// Pick the class file: explicit flag first, then the environment
pub fn classes_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var(CLASSES_ENV)
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    })
}

/// Load the class registry for a command
///
/// Without a class file only the built-in classes are known.
pub fn load_registry(explicit: Option<&Path>) -> Result<ClassRegistry> {
    let Some(path) = classes_path(explicit) else {
        log::debug!("no class file given, using built-in classes");
        return Ok(ClassRegistry::new());
    };

    let registry = ClassRegistry::from_file(&path)
        .map_err(typecast_diagnostics::CoercionError::from)
        .with_context(|| format!("Failed to load classes from {}", path.display()))?;
    log::debug!(
        "loaded {} classes from {}",
        registry.class_names().len(),
        path.display()
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typecast_types::TypeRegistry;

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.json");
        std::fs::write(&path, r#"{"classes": [{"name": "Order"}]}"#).unwrap();

        let registry = load_registry(Some(&path)).unwrap();
        assert!(registry.class_exists("Order"));
        assert!(registry.class_exists("Closure"));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_registry(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.json"));
    }
}
