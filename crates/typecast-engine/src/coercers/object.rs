//! Object coercion
//!
//! Markup elements unwrap to their text before the scalar rules apply.
//! Closures refuse the callable target since they cannot be persisted.
//! Any other object passes when it is an instance of the target, and can
//! otherwise only become a string through its own string conversion.

use crate::engine::CoercionEngine;
use crate::error::{cast_error, CastResult};
use typecast_diagnostics::{TC0104, TC0105};
use typecast_types::{CastTarget, ObjectValue, TypeTag, Value, DATETIME_CLASS};

/// Truthiness of markup text: blank or `"false"` is false
fn markup_truthiness(text: &str) -> bool {
    let trimmed = text.trim();
    !(trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false"))
}

impl CoercionEngine {
    /// Coerce an object to `target`
    pub(crate) fn coerce_object(&self, object: ObjectValue, target: &CastTarget) -> CastResult {
        if let ObjectValue::Markup(element) = &object {
            match target.tag() {
                Some(TypeTag::String) => return Ok(Value::String(element.text.clone())),
                Some(TypeTag::Integer) => {
                    return self.coerce_scalar(Value::String(element.text.clone()), target);
                }
                Some(TypeTag::Boolean) => {
                    return Ok(Value::Boolean(markup_truthiness(&element.text)));
                }
                _ => {}
            }
        }

        if matches!(object, ObjectValue::Closure(_)) && target.is(TypeTag::Callable) {
            return Err(cast_error(
                TC0105,
                &Value::Object(object),
                target,
                "Unable to cast Closure object to callable",
            ));
        }

        if self.is_instance_of(&object, target) {
            log::trace!("{} is an instance of {}", object.class_name(), target);
            return Ok(Value::Object(object));
        }

        if target.is(TypeTag::String) {
            if let Some(text) = object.to_display_string() {
                return Ok(Value::String(text));
            }
        }

        let message = format!("Unable to cast {} object to {}", object.class_name(), target);
        Err(cast_error(TC0104, &Value::Object(object), target, message))
    }

    /// Check whether an object satisfies `target` without conversion
    pub fn is_instance_of(&self, object: &ObjectValue, target: &CastTarget) -> bool {
        let class = object.class_name();
        match target {
            CastTarget::Class(name) => {
                class.eq_ignore_ascii_case(name) || self.registry().is_subclass_of(class, name)
            }
            CastTarget::Tag(TypeTag::Object) => true,
            CastTarget::Tag(TypeTag::DateTime) => {
                matches!(object, ObjectValue::DateTime(_))
                    || self.registry().is_subclass_of(class, DATETIME_CLASS)
            }
            CastTarget::Tag(TypeTag::Callable) => object.is_invocable(),
            CastTarget::Tag(_) => false,
        }
    }
}
