//! Class registry implementing TypeRegistry
//!
//! This module provides a concrete, shareable implementation of
//! [`TypeRegistry`] backed by a [`ClassModel`].

use crate::class_info::{ClassDecl, ClassModel, ClassModelDocument};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use typecast_diagnostics::{CoercionError, TC0301};
use typecast_types::TypeRegistry;

/// Class registry loading error
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<RegistryError> for CoercionError {
    fn from(err: RegistryError) -> Self {
        CoercionError::input_with_code(TC0301, err.to_string())
    }
}

/// Shared class registry
#[derive(Debug, Clone)]
pub struct ClassRegistry {
    model: Arc<RwLock<ClassModel>>,
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    /// Create a registry holding only the built-in classes
    pub fn new() -> Self {
        Self::from_model(ClassModel::with_builtins())
    }

    /// Create a registry from an existing model
    pub fn from_model(model: ClassModel) -> Self {
        Self {
            model: Arc::new(RwLock::new(model)),
        }
    }

    /// Load class declarations from a JSON string
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let document: ClassModelDocument = serde_json::from_str(json)
            .map_err(|e| RegistryError::ParseError(e.to_string()))?;
        log::debug!(
            "loaded {} class declarations and {} functions",
            document.classes.len(),
            document.functions.len()
        );
        Ok(Self::from_model(ClassModel::from_document(document)))
    }

    /// Load class declarations from a JSON file at runtime
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::IoError(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Auto-detect and load declarations from file based on extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_file(path),
            Some(ext) => Err(RegistryError::ParseError(format!(
                "Unsupported file extension: .{}. Expected .json",
                ext
            ))),
            None => Err(RegistryError::ParseError(
                "No file extension found. Expected .json".to_string(),
            )),
        }
    }

    /// Register (or replace) a class or interface
    pub fn register(&self, decl: ClassDecl) -> &Self {
        self.model.write().insert(decl);
        self
    }

    /// Register a free function name
    pub fn register_function(&self, name: &str) -> &Self {
        self.model.write().insert_function(name);
        self
    }

    /// Declared ancestors of a class, nearest first
    pub fn ancestors(&self, class: &str) -> Vec<String> {
        self.model.read().ancestors(class)
    }

    /// Names of every registered class and interface
    pub fn class_names(&self) -> Vec<String> {
        self.model
            .read()
            .classes()
            .map(|decl| decl.name.clone())
            .collect()
    }

    /// Serialize the registry contents as JSON
    pub fn to_json(&self) -> Result<String, RegistryError> {
        let document = self.model.read().to_document();
        serde_json::to_string_pretty(&document)
            .map_err(|e| RegistryError::ParseError(e.to_string()))
    }
}

impl TypeRegistry for ClassRegistry {
    fn class_exists(&self, name: &str) -> bool {
        self.model.read().contains(name)
    }

    fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
        self.model.read().is_subclass_of(class, ancestor)
    }

    fn function_exists(&self, name: &str) -> bool {
        self.model.read().has_function(name)
    }

    fn static_method_exists(&self, class: &str, method: &str) -> bool {
        self.model.read().has_static_method(class, method)
    }
}
