//! Tests for type name resolution

use pretty_assertions::assert_eq;
use rstest::rstest;
use typecast_types::{
    resolve_alias, CastTarget, EmptyRegistry, TypeRegistry, TypeTag, ALIASES,
};

/// Registry knowing a single `Invoice` class
struct Invoices;

impl TypeRegistry for Invoices {
    fn class_exists(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case("Invoice")
    }

    fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
        class.eq_ignore_ascii_case(ancestor) && self.class_exists(class)
    }
}

// ============================================================================
// Synonyms
// ============================================================================

#[rstest]
#[case("STR", TypeTag::String)]
#[case(" int ", TypeTag::Integer)]
#[case("Decimal", TypeTag::Float)]
#[case("Single", TypeTag::Float)]
#[case("BIT", TypeTag::Boolean)]
#[case("date", TypeTag::DateTime)]
#[case("time", TypeTag::DateTime)]
#[case("null", TypeTag::Void)]
fn test_synonyms_ignore_case_and_padding(#[case] name: &str, #[case] expected: TypeTag) {
    assert_eq!(
        resolve_alias(name, &EmptyRegistry).unwrap(),
        CastTarget::Tag(expected)
    );
}

#[test]
fn test_synonym_table_is_lowercase() {
    for (alias, _) in ALIASES {
        assert_eq!(*alias, alias.to_ascii_lowercase());
    }
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_synonyms_shadow_classes() {
    struct Everything;
    impl TypeRegistry for Everything {
        fn class_exists(&self, _name: &str) -> bool {
            true
        }
        fn is_subclass_of(&self, _class: &str, _ancestor: &str) -> bool {
            true
        }
    }

    assert_eq!(
        resolve_alias("array", &Everything).unwrap(),
        CastTarget::Tag(TypeTag::Array)
    );
}

#[test]
fn test_registered_class_resolves() {
    assert_eq!(
        resolve_alias("invoice", &Invoices).unwrap(),
        CastTarget::class("invoice")
    );
}

#[rstest]
#[case("Receipt")]
#[case("")]
#[case("   ")]
fn test_unknown_names_fail(#[case] name: &str) {
    let err = resolve_alias(name, &Invoices).unwrap_err();
    assert_eq!(err.code(), typecast_diagnostics::TC0001);
}
