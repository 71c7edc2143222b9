//! Model registry for collecting translated models.
//!
//! The translator hands every translated model (including nested ones) to a
//! registry through the [`ModelRegistry`] trait and never reads back. The
//! registry owns the models; callers query it afterwards.
//!
//! [`InMemoryRegistry`] is the provided implementation. By default it
//! resolves repeated registrations of the same name by keeping the latest
//! model (repeated references to the same nested model re-register it with
//! an identical layout, so this is the common case); the opt-in strict mode
//! instead rejects a re-registration that changes the field layout.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::TranslateError;
use crate::fields::{ApiField, ApiModel, ModelHandle};

/// Store for translated models.
///
/// The translator depends on exactly this one operation.
pub trait ModelRegistry {
    /// Materialize and store a model under the given name, returning a
    /// handle to the stored model.
    fn register(
        &mut self,
        name: &str,
        fields: Vec<(String, ApiField)>,
    ) -> Result<ModelHandle, TranslateError>;
}

/// In-memory model registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    /// All registered models by name
    models: HashMap<String, ModelHandle>,

    /// Whether re-registering a name with a different layout is an error
    collision_check: bool,
}

impl InMemoryRegistry {
    /// Create a new empty registry with last-write-wins name resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that rejects re-registration of a name with a
    /// different field layout.
    pub fn strict() -> Self {
        Self {
            models: HashMap::new(),
            collision_check: true,
        }
    }

    /// Get a registered model by name.
    pub fn get(&self, name: &str) -> Option<&ModelHandle> {
        self.models.get(name)
    }

    /// Check if a model is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Get all registered model names.
    pub fn model_names(&self) -> impl Iterator<Item = &String> {
        self.models.keys()
    }

    /// Get all registered models.
    pub fn models(&self) -> impl Iterator<Item = &ModelHandle> {
        self.models.values()
    }

    /// Get the number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelRegistry for InMemoryRegistry {
    fn register(
        &mut self,
        name: &str,
        fields: Vec<(String, ApiField)>,
    ) -> Result<ModelHandle, TranslateError> {
        let model = ApiModel::new(name, fields);

        if let Some(existing) = self.models.get(name) {
            if existing.fields != model.fields {
                if self.collision_check {
                    return Err(TranslateError::NameCollision {
                        name: name.to_string(),
                    });
                }
                warn!(
                    model = name,
                    "replacing registered model with a different field layout"
                );
            }
        }

        let handle = Arc::new(model);
        debug!(model = name, fields = handle.len(), "registered model");
        self.models.insert(name.to_string(), Arc::clone(&handle));
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldKind, PrimitiveField};

    fn string_field(name: &str) -> (String, ApiField) {
        (
            name.to_string(),
            ApiField::Primitive(PrimitiveField::new(FieldKind::String)),
        )
    }

    fn integer_field(name: &str) -> (String, ApiField) {
        (
            name.to_string(),
            ApiField::Primitive(PrimitiveField::new(FieldKind::Integer)),
        )
    }

    #[test]
    fn test_registry_new() {
        let registry = InMemoryRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = InMemoryRegistry::new();
        let handle = registry
            .register("customer", vec![string_field("name")])
            .unwrap();

        assert_eq!(handle.name, "customer");
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("customer"));
        assert_eq!(registry.get("customer"), Some(&handle));
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = InMemoryRegistry::new();
        registry
            .register("customer", vec![string_field("name")])
            .unwrap();
        let replacement = registry
            .register("customer", vec![integer_field("age")])
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("customer"), Some(&replacement));
        assert!(registry.get("customer").unwrap().contains("age"));
    }

    #[test]
    fn test_strict_rejects_different_layout() {
        let mut registry = InMemoryRegistry::strict();
        registry
            .register("customer", vec![string_field("name")])
            .unwrap();
        let result = registry.register("customer", vec![integer_field("age")]);

        assert_eq!(
            result,
            Err(TranslateError::NameCollision {
                name: "customer".to_string()
            })
        );
    }

    #[test]
    fn test_strict_allows_identical_layout() {
        let mut registry = InMemoryRegistry::strict();
        let first = registry
            .register("customer", vec![string_field("name")])
            .unwrap();
        let second = registry
            .register("customer", vec![string_field("name")])
            .unwrap();

        // Fresh handle each time, same shape.
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.fields, second.fields);
    }

    #[test]
    fn test_model_names() {
        let mut registry = InMemoryRegistry::new();
        registry.register("customer", vec![]).unwrap();
        registry.register("address", vec![]).unwrap();

        let mut names: Vec<_> = registry.model_names().cloned().collect();
        names.sort();
        assert_eq!(names, vec!["address", "customer"]);
        assert_eq!(registry.models().count(), 2);
    }
}
