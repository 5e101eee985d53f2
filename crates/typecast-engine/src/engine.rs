//! Coercion Engine
//!
//! This module provides the main CoercionEngine struct which gates each cast on
//! the behavior mode, short-circuits nulls, and dispatches by runtime category
//! to the value, object and collection coercers.

use crate::behavior::{behavior_mode, BehaviorMode};
use crate::error::{cast_error, CastResult, CoercionError, Result};
use std::sync::{Arc, LazyLock};
use typecast_diagnostics::TC0108;
use typecast_model::ClassRegistry;
use typecast_types::{resolve_alias, CastTarget, TypeRegistry, Value};

/// The main coercion engine
///
/// The engine holds the type registry used for class lookups and, optionally,
/// a pinned behavior mode that takes precedence over the process-wide one.
#[derive(Clone)]
pub struct CoercionEngine {
    /// Class, function and static method lookups
    registry: Arc<dyn TypeRegistry>,
    /// Mode used instead of the process-wide one
    mode: Option<BehaviorMode>,
}

impl Default for CoercionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoercionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoercionEngine")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl CoercionEngine {
    /// Create an engine backed by a registry of the built-in classes
    pub fn new() -> Self {
        Self::with_registry(ClassRegistry::new())
    }

    /// Create an engine with a custom registry
    pub fn with_registry(registry: impl TypeRegistry + 'static) -> Self {
        Self::with_shared_registry(Arc::new(registry))
    }

    /// Create an engine sharing an existing registry
    pub fn with_shared_registry(registry: Arc<dyn TypeRegistry>) -> Self {
        Self {
            registry,
            mode: None,
        }
    }

    /// Pin the behavior mode for this engine
    pub fn with_mode(mut self, mode: BehaviorMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Get the registry used for class lookups
    pub fn registry(&self) -> &dyn TypeRegistry {
        self.registry.as_ref()
    }

    /// Get the pinned mode, if any
    pub fn pinned_mode(&self) -> Option<BehaviorMode> {
        self.mode
    }

    /// Mode in effect for the next cast
    pub fn mode(&self) -> Result<BehaviorMode> {
        match self.mode {
            Some(mode) => Ok(mode),
            None => behavior_mode(),
        }
    }

    /// Resolve a free-text type name to a cast target
    pub fn resolve(&self, name: &str) -> Result<CastTarget> {
        resolve_alias(name, self.registry.as_ref())
    }

    /// Cast a value to the named type or class
    pub fn cast(&self, value: impl Into<Value>, target: &str) -> CastResult {
        let value = value.into();
        if self.passes_unchecked(&value)? {
            return Ok(value);
        }
        let target = self.resolve(target)?;
        self.dispatch(value, &target)
    }

    /// Cast a value to an already resolved target
    pub fn cast_to(&self, value: impl Into<Value>, target: &CastTarget) -> CastResult {
        let value = value.into();
        if self.passes_unchecked(&value)? {
            return Ok(value);
        }
        self.dispatch(value, target)
    }

    /// Apply the behavior gate and the null short-circuit
    ///
    /// Returns `true` when the value must be returned as is.
    fn passes_unchecked(&self, value: &Value) -> Result<bool> {
        match self.mode()? {
            BehaviorMode::NoOp => {
                log::trace!("noop mode, returning {} unchanged", value.type_name());
                return Ok(true);
            }
            mode @ (BehaviorMode::CastOnly | BehaviorMode::CheckOnly) => {
                return Err(CoercionError::not_implemented(mode.name()));
            }
            BehaviorMode::CheckAndCast => {}
        }
        Ok(value.is_null())
    }

    /// Route a non-null value to the coercer for its runtime category
    pub(crate) fn dispatch(&self, value: Value, target: &CastTarget) -> CastResult {
        log::debug!(
            "casting {} ({:?}) to {}",
            value.type_name(),
            value.category(),
            target
        );
        match value {
            Value::Null => Ok(Value::Null),
            Value::Object(object) => self.coerce_object(object, target),
            Value::Array(_) => self.coerce_collection(value, target),
            Value::Resource(_) => Err(cast_error(
                TC0108,
                &value,
                target,
                "Resources cannot be cast",
            )),
            scalar => self.coerce_scalar(scalar, target),
        }
    }

    /// Check whether a value can be invoked by the host
    ///
    /// Strings name a registered function or a `Class::method` static method.
    /// Arrays must be an `[object, method]` or `[class, static method]` pair.
    /// Objects must be invocable themselves.
    pub fn is_callable(&self, value: &Value) -> bool {
        match value {
            Value::String(name) => self.is_callable_name(name),
            Value::Array(items) => self.is_callable_pair(items),
            Value::Object(object) => object.is_invocable(),
            _ => false,
        }
    }

    fn is_callable_name(&self, name: &str) -> bool {
        match name.split_once("::") {
            Some((class, method)) => self.registry.static_method_exists(class, method),
            None => self.registry.function_exists(name),
        }
    }

    pub(crate) fn is_callable_pair(&self, items: &[Value]) -> bool {
        match items {
            [Value::Object(object), Value::String(method)] => object.has_method(method),
            [Value::String(class), Value::String(method)] => {
                self.registry.static_method_exists(class, method)
            }
            _ => false,
        }
    }
}

static DEFAULT_ENGINE: LazyLock<CoercionEngine> = LazyLock::new(CoercionEngine::new);

/// Cast with a shared engine that knows only the built-in classes
pub fn cast(value: impl Into<Value>, target: &str) -> CastResult {
    DEFAULT_ENGINE.cast(value, target)
}
