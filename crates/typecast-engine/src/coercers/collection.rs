//! Array coercion

use crate::engine::CoercionEngine;
use crate::error::{cast_error, CastResult};
use typecast_diagnostics::TC0107;
use typecast_types::{CastTarget, TypeTag, Value};

impl CoercionEngine {
    /// Coerce an array: arrays pass through, callables must be a valid pair
    pub(crate) fn coerce_collection(&self, value: Value, target: &CastTarget) -> CastResult {
        if target.is(TypeTag::Array) {
            log::trace!("array passes through");
            return Ok(value);
        }

        if target.is(TypeTag::Callable)
            && value
                .as_array()
                .is_some_and(|items| self.is_callable_pair(items))
        {
            return Ok(value);
        }

        let message = format!("Unable to cast Array to {}", target);
        Err(cast_error(TC0107, &value, target, message))
    }
}
