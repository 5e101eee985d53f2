//! Mock type registry for unit tests

use crate::{BehaviorMode, CoercionEngine};
use mockall::mock;
use typecast_types::TypeRegistry;

mock! {
    pub Registry {}

    impl TypeRegistry for Registry {
        fn class_exists(&self, name: &str) -> bool;
        fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool;
        fn function_exists(&self, name: &str) -> bool;
        fn static_method_exists(&self, class: &str, method: &str) -> bool;
    }
}

/// Engine over `registry` with the validating mode pinned
pub fn checked(registry: MockRegistry) -> CoercionEngine {
    CoercionEngine::with_registry(registry).with_mode(BehaviorMode::CheckAndCast)
}

/// Validating engine over the built-in classes
pub fn builtin() -> CoercionEngine {
    CoercionEngine::new().with_mode(BehaviorMode::CheckAndCast)
}
