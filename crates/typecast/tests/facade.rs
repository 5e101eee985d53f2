//! Tests for the top-level crate surface

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use typecast::types::{DynamicObject, MarkupElement};
use typecast::{
    resolve_alias, BehaviorMode, CastTarget, ClassRegistry, CoercionEngine, ObjectValue, TypeTag,
    Value,
};

const CLASSES: &str = r#"{
    "classes": [
        {"name": "Shape", "isInterface": true},
        {"name": "Polygon", "interfaces": ["Shape"]},
        {"name": "Square", "parent": "Polygon", "staticMethods": ["unit"]}
    ],
    "functions": ["strlen"]
}"#;

fn engine() -> CoercionEngine {
    let registry = ClassRegistry::from_json(CLASSES).unwrap();
    CoercionEngine::with_registry(registry).with_mode(BehaviorMode::CheckAndCast)
}

// ============================================================================
// Resolution
// ============================================================================

#[rstest]
#[case("Dbl", CastTarget::Tag(TypeTag::Float))]
#[case("bit", CastTarget::Tag(TypeTag::Boolean))]
#[case(" Square ", CastTarget::class("Square"))]
fn test_resolution_through_facade(#[case] name: &str, #[case] expected: CastTarget) {
    let registry = ClassRegistry::from_json(CLASSES).unwrap();
    assert_eq!(resolve_alias(name, &registry).unwrap(), expected);
}

// ============================================================================
// Casting
// ============================================================================

#[test]
fn test_loaded_hierarchy_drives_object_casts() {
    let engine = engine();
    let square = Value::from(ObjectValue::instance(DynamicObject::new("Square")));

    assert_eq!(engine.cast(square.clone(), "Shape").unwrap(), square);
    assert!(engine.cast(square, "DateTime").is_err());
}

#[test]
fn test_loaded_functions_are_callable() {
    let engine = engine();

    assert_eq!(
        engine.cast("strlen", "callable").unwrap(),
        Value::string("strlen")
    );
    assert_eq!(
        engine.cast("Square::unit", "callable").unwrap(),
        Value::string("Square::unit")
    );
    assert!(engine.cast("Square::area", "callable").is_err());
}

#[test]
fn test_markup_through_facade() {
    let engine = engine();
    let markup = Value::from(ObjectValue::Markup(MarkupElement::new("qty", " 12 ")));

    assert_eq!(engine.cast(markup, "string").unwrap(), Value::string(" 12 "));
}

#[test]
fn test_errors_render_as_diagnostics() {
    let err = engine().cast(true, "float").unwrap_err();
    let diagnostic = err.to_diagnostic();

    assert_eq!(diagnostic.code, typecast::diagnostics::TC0102);
    assert_eq!(diagnostic.value.as_deref(), Some("true"));
}

#[test]
fn test_diagnostic_display() {
    let err = engine().cast("12abc", "integer").unwrap_err();
    assert_snapshot!(
        err.to_diagnostic(),
        @"error: TC0101 - Unable to cast string value to integer: 12abc (value: 12abc)"
    );
}
