//! Cast errors for the coercion engine

use typecast_diagnostics::ErrorCode;
use typecast_types::{CastTarget, Value};

pub use typecast_diagnostics::{CoercionError, ErrorKind, Result};

/// Result of a single cast
pub type CastResult = Result<Value>;

/// Invalid cast naming the value's runtime type and the target
pub(crate) fn cast_error(
    code: ErrorCode,
    value: &Value,
    target: &CastTarget,
    message: impl Into<String>,
) -> CoercionError {
    CoercionError::invalid_cast(code, value.type_name(), target.name(), message)
        .with_value(value.render())
}

/// The generic "Unable to cast {type} value to {target}: {value}" error
pub(crate) fn unable_to_cast(code: ErrorCode, value: &Value, target: &CastTarget) -> CoercionError {
    CoercionError::unable_to_cast(value.type_name(), target.name(), value.render()).with_code(code)
}
