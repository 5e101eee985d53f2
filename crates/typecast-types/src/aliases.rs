//! Free-text type name resolution
//!
//! Type names arrive as loose text ("int", "Bool", "decimal", "Invoice").
//! Known synonyms resolve to a [`TypeTag`]; anything else must name a class or
//! interface registered with the host.

use crate::{CastTarget, TypeRegistry, TypeTag};
use typecast_diagnostics::{CoercionError, Result, TC0001};

/// Synonym table, keyed by lowercase name
pub const ALIASES: &[(&str, TypeTag)] = &[
    ("string", TypeTag::String),
    ("str", TypeTag::String),
    ("integer", TypeTag::Integer),
    ("int", TypeTag::Integer),
    ("float", TypeTag::Float),
    ("flt", TypeTag::Float),
    ("double", TypeTag::Float),
    ("dbl", TypeTag::Float),
    ("single", TypeTag::Float),
    ("decimal", TypeTag::Float),
    ("bool", TypeTag::Boolean),
    ("boolean", TypeTag::Boolean),
    ("bit", TypeTag::Boolean),
    ("datetime", TypeTag::DateTime),
    ("date", TypeTag::DateTime),
    ("time", TypeTag::DateTime),
    ("callable", TypeTag::Callable),
    ("array", TypeTag::Array),
    ("object", TypeTag::Object),
    ("resource", TypeTag::Resource),
    ("null", TypeTag::Void),
    ("void", TypeTag::Void),
];

/// Look a name up in the synonym table only
pub fn lookup_alias(name: &str) -> Option<TypeTag> {
    let lowered = name.trim().to_ascii_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, tag)| *tag)
}

/// All synonyms that resolve to `tag`
pub fn aliases_of(tag: TypeTag) -> impl Iterator<Item = &'static str> {
    ALIASES
        .iter()
        .filter(move |(_, t)| *t == tag)
        .map(|(alias, _)| *alias)
}

/// Resolve a free-text type name to a tag or a registered class name
pub fn resolve_alias(name: &str, registry: &dyn TypeRegistry) -> Result<CastTarget> {
    if let Some(tag) = lookup_alias(name) {
        return Ok(CastTarget::Tag(tag));
    }

    let class = name.trim();
    if !class.is_empty() && registry.class_exists(class) {
        return Ok(CastTarget::Class(class.to_string()));
    }

    Err(CoercionError::invalid_cast(
        TC0001,
        "type name",
        name,
        format!(
            "Unable to determine type of item from type name to lookup its Type or Class: {}",
            name
        ),
    )
    .with_value(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmptyRegistry;

    struct OneClass;

    impl TypeRegistry for OneClass {
        fn class_exists(&self, name: &str) -> bool {
            name.eq_ignore_ascii_case("Invoice")
        }

        fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
            class.eq_ignore_ascii_case(ancestor)
        }
    }

    #[test]
    fn test_alias_lookup_is_case_insensitive() {
        assert_eq!(lookup_alias("INT"), Some(TypeTag::Integer));
        assert_eq!(lookup_alias("Double"), Some(TypeTag::Float));
        assert_eq!(lookup_alias("bit"), Some(TypeTag::Boolean));
        assert_eq!(lookup_alias(" date "), Some(TypeTag::DateTime));
        assert_eq!(lookup_alias("NULL"), Some(TypeTag::Void));
        assert_eq!(lookup_alias("Invoice"), None);
    }

    #[test]
    fn test_aliases_of() {
        let floats: Vec<_> = aliases_of(TypeTag::Float).collect();
        assert_eq!(floats, vec!["float", "flt", "double", "dbl", "single", "decimal"]);
    }

    #[test]
    fn test_resolve_registered_class() {
        let target = resolve_alias("Invoice", &OneClass).unwrap();
        assert_eq!(target, CastTarget::class("Invoice"));
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        let err = resolve_alias("Nonexistent", &EmptyRegistry).unwrap_err();
        assert!(err.is_invalid_cast());
        assert_eq!(err.code(), TC0001);

        assert!(resolve_alias("", &EmptyRegistry).is_err());
    }
}
