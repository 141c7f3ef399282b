//! Stage Registry - config-driven stage creation
//!
//! The registry maps stage type names to factory implementations, so an
//! embedding application can describe a pipeline's swappable transform slot
//! in TOML and have the right stage built for it.
//!
//! # Design
//!
//! - **Compile-time extensibility**: Users implement the `StageFactory` trait
//! - **Type-safe**: Factories return `Arc<dyn Stage>`, ready to install into
//!   a pipeline slot
//! - **Config-driven**: The instance config names the stage type
//!
//! # Example
//!
//! ```
//! use trellis_stage::{default_registry, Stage, StageInstanceConfig};
//!
//! let registry = default_registry();
//! let stage = registry
//!     .create("fallback", &StageInstanceConfig::fallback())
//!     .unwrap();
//! assert_eq!(stage.name(), "fallback");
//! ```

use crate::{
    FallbackTransformStage, Stage, StageError, StageInstanceConfig, StageResult, TransformConfig,
    TransformStage,
};
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

/// Factory trait for creating stages
///
/// Implement this trait to register custom stages with the registry.
pub trait StageFactory: Send + Sync {
    /// Create a stage instance from configuration
    ///
    /// # Errors
    /// Returns `StageError::Config` if configuration is invalid
    fn create(&self, config: &StageInstanceConfig) -> StageResult<Arc<dyn Stage>>;

    /// Human-readable name for this factory (for error messages)
    fn name(&self) -> &'static str;
}

/// Registry for stage factories
///
/// Maps stage type names (e.g., "transform", "fallback") to their factory
/// implementations.
pub struct StageRegistry {
    factories: HashMap<String, Box<dyn StageFactory>>,
}

impl StageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a stage factory
    ///
    /// # Panics
    /// Panics if a factory is already registered with this name.
    /// Use `try_register` for fallible registration.
    pub fn register<F: StageFactory + 'static>(&mut self, type_name: &str, factory: F) {
        if self.factories.contains_key(type_name) {
            panic!("Stage factory '{}' already registered", type_name);
        }
        self.factories
            .insert(type_name.to_string(), Box::new(factory));
    }

    /// Try to register a stage factory
    ///
    /// Returns `false` if a factory is already registered with this name.
    pub fn try_register<F: StageFactory + 'static>(
        &mut self,
        type_name: &str,
        factory: F,
    ) -> bool {
        if self.factories.contains_key(type_name) {
            return false;
        }
        self.factories
            .insert(type_name.to_string(), Box::new(factory));
        true
    }

    /// Create a stage from its type name and configuration
    ///
    /// # Errors
    /// - `StageError::Config` if the type is not registered
    /// - `StageError::Config` if the factory rejects the configuration
    pub fn create(
        &self,
        type_name: &str,
        config: &StageInstanceConfig,
    ) -> StageResult<Arc<dyn Stage>> {
        let factory = self.factories.get(type_name).ok_or_else(|| {
            StageError::config(format!(
                "unknown stage type '{}', available: [{}]",
                type_name,
                self.available_types().join(", ")
            ))
        })?;

        factory.create(config)
    }

    /// Check if a stage type is registered
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Get list of registered stage types
    pub fn available_types(&self) -> Vec<&str> {
        let mut types: Vec<_> = self.factories.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for StageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory for `TransformStage`
pub struct TransformFactory;

impl StageFactory for TransformFactory {
    fn create(&self, config: &StageInstanceConfig) -> StageResult<Arc<dyn Stage>> {
        let transform_config = TransformConfig::try_from(config).map_err(StageError::config)?;
        Ok(Arc::new(TransformStage::new(transform_config)))
    }

    fn name(&self) -> &'static str {
        "transform"
    }
}

/// Factory for `FallbackTransformStage`
pub struct FallbackFactory;

impl StageFactory for FallbackFactory {
    fn create(&self, _config: &StageInstanceConfig) -> StageResult<Arc<dyn Stage>> {
        Ok(Arc::new(FallbackTransformStage::new()))
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

/// Create a registry with all built-in transform-family stages registered
///
/// Includes:
/// - `transform` - Enriching transform (honors `fail_on_invalid`)
/// - `fallback` - Degraded-mode transform used by recovery
pub fn default_registry() -> StageRegistry {
    let mut registry = StageRegistry::new();
    registry.register("transform", TransformFactory);
    registry.register("fallback", FallbackFactory);
    registry
}
