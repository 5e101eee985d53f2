//! Scalar coercion
//!
//! Every conversion here is checked by converting back and comparing with the
//! original. A conversion that does not reproduce its input is rejected, with
//! two exceptions:
//!
//! - ASCII digit strings outside the native range are returned unchanged
//! - float conversions that lose the precision the input expressed return the
//!   input unchanged

use crate::engine::CoercionEngine;
use crate::error::{cast_error, unable_to_cast, CastResult};
use regex::Regex;
use std::sync::LazyLock;
use typecast_diagnostics::{TC0100, TC0101, TC0102, TC0103, TC0106};
use typecast_types::{render_float, CastTarget, TypeTag, Value};

/// Largest difference tolerated when a float round-trips through a string
pub const FLOAT_EPSILON: f64 = 1.0e-11;

static INTEGER_TEXT: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$"));

static NUMERIC_TEXT: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
});

fn matches(pattern: &LazyLock<Result<Regex, regex::Error>>, text: &str) -> bool {
    pattern.as_ref().is_ok_and(|re| re.is_match(text))
}

/// Check whether text is a plain decimal or exponent number
pub fn is_numeric(text: &str) -> bool {
    matches(&NUMERIC_TEXT, text)
}

/// Check whether text is an optionally negative run of ASCII digits
pub fn is_integer_text(text: &str) -> bool {
    matches(&INTEGER_TEXT, text)
}

/// Host truthiness of a scalar
///
/// Only the empty string and `"false"` (any case, surrounding blanks ignored)
/// are false among strings. Numbers are false when zero.
pub fn truthiness(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !(s.is_empty() || s.trim().eq_ignore_ascii_case("false")),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) | Value::Resource(_) => true,
    }
}

/// Digits after the decimal point of a number's text
fn precision_of(text: &str) -> usize {
    text.find('.').map_or(0, |i| text.len() - i - 1)
}

impl CoercionEngine {
    /// Coerce a scalar (boolean, integer, float or string) to `target`
    pub(crate) fn coerce_scalar(&self, value: Value, target: &CastTarget) -> CastResult {
        match target {
            CastTarget::Tag(TypeTag::Boolean) => Ok(Value::Boolean(truthiness(&value))),
            CastTarget::Tag(TypeTag::Integer) => scalar_to_integer(value, target),
            CastTarget::Tag(TypeTag::Float) => scalar_to_float(value, target),
            CastTarget::Tag(TypeTag::String) => scalar_to_string(value, target),
            CastTarget::Tag(TypeTag::Callable) => {
                if self.is_callable(&value) {
                    Ok(value)
                } else {
                    let message = format!("Unable to cast {} value to callable", value.type_name());
                    Err(cast_error(TC0106, &value, target, message))
                }
            }
            _ => {
                let message = format!(
                    "Unable to cast {} value to unknown type {}",
                    value.type_name(),
                    target
                );
                Err(cast_error(TC0100, &value, target, message))
            }
        }
    }
}

fn scalar_to_integer(value: Value, target: &CastTarget) -> CastResult {
    let (original, converted) = match &value {
        Value::Integer(_) => {
            log::trace!("integer passes through");
            return Ok(value);
        }
        Value::Boolean(_) => return Err(unable_to_cast(TC0102, &value, target)),
        Value::String(s) if s.is_empty() => return Ok(Value::Null),
        Value::String(s) => (s.clone(), s.parse::<i64>().ok()),
        Value::Float(f) => {
            // Saturates out of range, so the comparison fails
            let i = *f as i64;
            if i.to_string() == render_float(*f) {
                return Ok(Value::Integer(i));
            }
            return Err(unable_to_cast(TC0101, &value, target));
        }
        _ => return Err(unable_to_cast(TC0100, &value, target)),
    };

    if let Some(i) = converted.filter(|i| i.to_string() == original) {
        return Ok(Value::Integer(i));
    }

    if is_integer_text(&original) {
        log::debug!("{} exceeds the native integer range, keeping text", original);
        return Ok(Value::String(original));
    }

    Err(unable_to_cast(TC0101, &value, target))
}

fn scalar_to_float(value: Value, target: &CastTarget) -> CastResult {
    let original = match &value {
        Value::Float(_) => {
            log::trace!("float passes through");
            return Ok(value);
        }
        Value::Boolean(_) => return Err(unable_to_cast(TC0102, &value, target)),
        Value::String(s) if s.is_empty() => return Ok(Value::Null),
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        _ => return Err(unable_to_cast(TC0100, &value, target)),
    };

    let parsed = if is_numeric(&original) {
        original.trim().parse::<f64>().ok()
    } else {
        None
    };
    let Some(float) = parsed else {
        let message = format!("Invalid float: {}", original);
        return Err(cast_error(TC0103, &value, target, message));
    };

    let precision = precision_of(&original);
    if format!("{:.*}", precision, float) == original {
        return Ok(Value::Float(float));
    }

    log::debug!(
        "float conversion of {} loses precision, returning the original value",
        original
    );
    Ok(value)
}

fn scalar_to_string(value: Value, target: &CastTarget) -> CastResult {
    match &value {
        Value::String(_) => {
            log::trace!("string passes through");
            Ok(value)
        }
        Value::Boolean(b) => Ok(Value::string(if *b { "1" } else { "" })),
        Value::Integer(i) => Ok(Value::String(i.to_string())),
        Value::Float(f) => {
            let text = render_float(*f);
            let back = if is_numeric(&text) {
                text.parse::<f64>().unwrap_or(0.0)
            } else {
                0.0
            };
            if (f - back).abs() <= FLOAT_EPSILON {
                Ok(Value::String(text))
            } else {
                Err(unable_to_cast(TC0101, &value, target))
            }
        }
        _ => Err(unable_to_cast(TC0100, &value, target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::builtin;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn cast(value: impl Into<Value>, tag: TypeTag) -> CastResult {
        builtin().cast_to(value, &tag.into())
    }

    #[rstest]
    #[case("1.5", true)]
    #[case(" -2 ", true)]
    #[case(".5", true)]
    #[case("5.", true)]
    #[case("1e-3", true)]
    #[case("+7E2", true)]
    #[case("", false)]
    #[case("abc", false)]
    #[case("1.2.3", false)]
    #[case("0x1A", false)]
    #[case("NAN", false)]
    #[case("\u{0661}\u{0662}", false)]
    #[case("\u{00A0}12", false)]
    #[case("\t12\n", true)]
    fn test_is_numeric(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_numeric(text), expected);
    }

    #[rstest]
    #[case(Value::string(""), false)]
    #[case(Value::string("false"), false)]
    #[case(Value::string(" FALSE "), false)]
    #[case(Value::string("0"), true)]
    #[case(Value::string(" "), true)]
    #[case(Value::string("no"), true)]
    #[case(Value::Integer(0), false)]
    #[case(Value::Integer(-3), true)]
    #[case(Value::Float(0.0), false)]
    #[case(Value::Float(0.1), true)]
    #[case(Value::Boolean(false), false)]
    fn test_to_boolean(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(cast(value, TypeTag::Boolean).unwrap(), Value::Boolean(expected));
    }

    #[rstest]
    #[case(Value::string("42"), Value::Integer(42))]
    #[case(Value::string("-17"), Value::Integer(-17))]
    #[case(Value::string(""), Value::Null)]
    #[case(Value::string("007"), Value::string("007"))]
    #[case(Value::string("99999999999999999999"), Value::string("99999999999999999999"))]
    #[case(Value::Float(3.0), Value::Integer(3))]
    #[case(Value::Float(-12.0), Value::Integer(-12))]
    #[case(Value::Integer(9), Value::Integer(9))]
    fn test_to_integer(#[case] value: Value, #[case] expected: Value) {
        assert_eq!(cast(value, TypeTag::Integer).unwrap(), expected);
    }

    #[rstest]
    #[case(Value::Boolean(true), TC0102)]
    #[case(Value::string("12abc"), TC0101)]
    #[case(Value::string("+5"), TC0101)]
    #[case(Value::string("1.5"), TC0101)]
    #[case(Value::Float(3.5), TC0101)]
    #[case(Value::Float(f64::NAN), TC0101)]
    #[case(Value::string("\u{0661}\u{0662}\u{0663}"), TC0101)]
    #[case(Value::string("\u{FF11}\u{FF12}"), TC0101)]
    #[case(Value::string("-\u{0967}\u{0968}"), TC0101)]
    fn test_to_integer_rejects(#[case] value: Value, #[case] code: typecast_diagnostics::ErrorCode) {
        assert_eq!(cast(value, TypeTag::Integer).unwrap_err().code(), code);
    }

    #[rstest]
    #[case(9223372036854775808.0)]
    #[case(1.5e300)]
    #[case(-1.0e19)]
    #[case(-0.0)]
    fn test_to_integer_rejects_floats_outside_range(#[case] value: f64) {
        assert_eq!(cast(value, TypeTag::Integer).unwrap_err().code(), TC0101);
    }

    #[test]
    fn test_integer_text_is_ascii_only() {
        assert!(is_integer_text("-123"));
        assert!(!is_integer_text("\u{0661}\u{0662}\u{0663}"));
    }

    #[rstest]
    #[case(Value::string("3.14"), Value::Float(3.14))]
    #[case(Value::string("-0.5"), Value::Float(-0.5))]
    #[case(Value::string("2"), Value::Float(2.0))]
    #[case(Value::string("3.10"), Value::Float(3.1))]
    #[case(Value::Integer(5), Value::Float(5.0))]
    #[case(Value::Float(1.25), Value::Float(1.25))]
    #[case(Value::string(""), Value::Null)]
    fn test_to_float(#[case] value: Value, #[case] expected: Value) {
        assert_eq!(cast(value, TypeTag::Float).unwrap(), expected);
    }

    #[rstest]
    #[case(Value::string("1e3"))]
    #[case(Value::string(" 2.5"))]
    #[case(Value::string("0.30000000000000000001"))]
    #[case(Value::Integer(9007199254740993))]
    fn test_to_float_keeps_original_when_precision_lost(#[case] value: Value) {
        assert_eq!(cast(value.clone(), TypeTag::Float).unwrap(), value);
    }

    #[rstest]
    #[case(Value::Boolean(false), TC0102)]
    #[case(Value::string("abc"), TC0103)]
    #[case(Value::string("1,5"), TC0103)]
    fn test_to_float_rejects(#[case] value: Value, #[case] code: typecast_diagnostics::ErrorCode) {
        assert_eq!(cast(value, TypeTag::Float).unwrap_err().code(), code);
    }

    #[rstest]
    #[case(Value::Boolean(true), "1")]
    #[case(Value::Boolean(false), "")]
    #[case(Value::Integer(-40), "-40")]
    #[case(Value::Float(3.14), "3.14")]
    #[case(Value::Float(2.0), "2")]
    #[case(Value::Float(1e-7), "0.0000001")]
    #[case(Value::string("as is"), "as is")]
    fn test_to_string(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(cast(value, TypeTag::String).unwrap(), Value::string(expected));
    }

    #[test]
    fn test_non_finite_floats_do_not_stringify() {
        assert!(cast(f64::NAN, TypeTag::String).is_err());
        assert!(cast(f64::INFINITY, TypeTag::String).is_err());
    }

    #[rstest]
    #[case(TypeTag::Array)]
    #[case(TypeTag::Object)]
    #[case(TypeTag::DateTime)]
    #[case(TypeTag::Resource)]
    #[case(TypeTag::Void)]
    fn test_scalars_reject_other_targets(#[case] tag: TypeTag) {
        let err = cast("text", tag).unwrap_err();
        assert_eq!(err.code(), TC0100);
        assert_eq!(err.types(), Some(("string", tag.name())));
    }

    #[test]
    fn test_scalar_to_callable() {
        let err = cast(12, TypeTag::Callable).unwrap_err();
        assert_eq!(err.code(), TC0106);
        assert_eq!(
            err.to_string(),
            "TC0106: Unable to cast integer value to callable"
        );

        assert_eq!(
            cast("DateTime::createFromFormat", TypeTag::Callable).unwrap(),
            Value::string("DateTime::createFromFormat")
        );
    }

    #[test]
    fn test_scalar_to_class_target() {
        let err = builtin()
            .cast_to("x", &CastTarget::class("Closure"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "TC0100: Unable to cast string value to unknown type Closure"
        );
    }
}
