//! Class hierarchy description

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use typecast_types::{CLOSURE_CLASS, DATETIME_CLASS, MARKUP_CLASS};

/// Declaration of a single class or interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDecl {
    /// Class name as declared
    pub name: String,
    /// Parent class, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Implemented (or, for interfaces, extended) interfaces
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub interfaces: SmallVec<[String; 2]>,
    /// Whether this declaration is an interface
    #[serde(default)]
    pub is_interface: bool,
    /// Static methods callable as `Class::method`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_methods: Vec<String>,
}

impl ClassDecl {
    /// Declare a class
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            interfaces: SmallVec::new(),
            is_interface: false,
            static_methods: Vec::new(),
        }
    }

    /// Declare an interface
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            is_interface: true,
            ..Self::class(name)
        }
    }

    /// Set the parent class
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Add an implemented interface
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a static method
    pub fn with_static_method(mut self, method: impl Into<String>) -> Self {
        self.static_methods.push(method.into());
        self
    }

    /// Direct supertypes: parent first, then interfaces
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.parent
            .iter()
            .chain(self.interfaces.iter())
            .map(String::as_str)
    }
}

/// Serialized form of a class model document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassModelDocument {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    #[serde(default)]
    pub functions: Vec<String>,
}

/// Class hierarchy keyed by case-folded name
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    classes: IndexMap<String, ClassDecl>,
    functions: IndexSet<String>,
}

fn fold(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

impl ClassModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model holding the engine's built-in classes
    pub fn with_builtins() -> Self {
        let mut model = Self::new();
        model.insert(ClassDecl::class(CLOSURE_CLASS));
        model.insert(ClassDecl::class(MARKUP_CLASS));
        model.insert(ClassDecl::interface("DateTimeInterface"));
        model.insert(
            ClassDecl::class(DATETIME_CLASS)
                .implements("DateTimeInterface")
                .with_static_method("createFromFormat"),
        );
        model
    }

    /// Build a model from a document, on top of the built-ins
    pub fn from_document(document: ClassModelDocument) -> Self {
        let mut model = Self::with_builtins();
        for decl in document.classes {
            model.insert(decl);
        }
        for function in document.functions {
            model.insert_function(&function);
        }
        model
    }

    /// Add or replace a declaration
    pub fn insert(&mut self, decl: ClassDecl) {
        self.classes.insert(fold(&decl.name), decl);
    }

    /// Add a free function
    pub fn insert_function(&mut self, name: &str) {
        self.functions.insert(fold(name));
    }

    /// Get a declaration by name
    pub fn get(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.get(&fold(name))
    }

    /// Check if a class or interface exists
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(&fold(name))
    }

    /// Check if a free function exists
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(&fold(name))
    }

    /// Iterate declarations in insertion order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.classes.values()
    }

    /// Every supertype reachable from `class`, nearest first, excluding itself
    pub fn ancestors(&self, class: &str) -> Vec<String> {
        let mut seen: IndexSet<String> = IndexSet::new();
        let mut queue = vec![fold(class)];
        seen.insert(fold(class));

        while let Some(current) = queue.pop() {
            let Some(decl) = self.classes.get(&current) else {
                continue;
            };
            for supertype in decl.supertypes() {
                let key = fold(supertype);
                if seen.insert(key.clone()) {
                    queue.insert(0, key);
                }
            }
        }

        seen.into_iter()
            .skip(1)
            .map(|key| {
                self.classes
                    .get(&key)
                    .map(|decl| decl.name.clone())
                    .unwrap_or(key)
            })
            .collect()
    }

    /// Check if `class` is `ancestor` or inherits from it
    pub fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
        let target = fold(ancestor);
        if fold(class) == target {
            return self.contains(class);
        }
        self.ancestors(class).iter().any(|name| fold(name) == target)
    }

    /// Check for a static method declared on `class` or inherited
    pub fn has_static_method(&self, class: &str, method: &str) -> bool {
        let declares = |name: &str| {
            self.get(name).is_some_and(|decl| {
                decl.static_methods
                    .iter()
                    .any(|m| m.eq_ignore_ascii_case(method))
            })
        };
        declares(class) || self.ancestors(class).iter().any(|name| declares(name.as_str()))
    }

    /// Snapshot as a serializable document
    pub fn to_document(&self) -> ClassModelDocument {
        ClassModelDocument {
            classes: self.classes.values().cloned().collect(),
            functions: self.functions.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes() -> ClassModel {
        let mut model = ClassModel::new();
        model.insert(ClassDecl::interface("Drawable"));
        model.insert(ClassDecl::class("Shape").implements("Drawable"));
        model.insert(ClassDecl::class("Circle").extends("Shape").with_static_method("unit"));
        model
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let model = shapes();
        assert_eq!(model.ancestors("Circle"), vec!["Shape", "Drawable"]);
        assert!(model.ancestors("Drawable").is_empty());
    }

    #[test]
    fn test_subclass_checks() {
        let model = shapes();
        assert!(model.is_subclass_of("Circle", "Shape"));
        assert!(model.is_subclass_of("circle", "DRAWABLE"));
        assert!(model.is_subclass_of("Shape", "Shape"));
        assert!(!model.is_subclass_of("Shape", "Circle"));
        assert!(!model.is_subclass_of("Ghost", "Ghost"));
    }

    #[test]
    fn test_cyclic_hierarchy_terminates() {
        let mut model = ClassModel::new();
        model.insert(ClassDecl::class("A").extends("B"));
        model.insert(ClassDecl::class("B").extends("A"));

        assert!(model.is_subclass_of("A", "B"));
        assert_eq!(model.ancestors("A"), vec!["B"]);
    }

    #[test]
    fn test_static_methods_inherit() {
        let mut model = shapes();
        model.insert(ClassDecl::class("Ring").extends("Circle"));

        assert!(model.has_static_method("Ring", "unit"));
        assert!(!model.has_static_method("Shape", "unit"));
    }

    #[test]
    fn test_builtins() {
        let model = ClassModel::with_builtins();
        assert!(model.contains("closure"));
        assert!(model.is_subclass_of("DateTime", "DateTimeInterface"));
    }
}
