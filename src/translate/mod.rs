//! Schema translation.
//!
//! This module implements the translator that walks a source model's fields
//! and produces a registered REST field model, recursing into nested
//! sub-models along the way.
//!
//! # Features
//!
//! - Primitive kind resolution through [`FieldKindMapper`]
//! - Optional unwrapping (union-with-null) with the required flag cleared
//! - Collections of primitive elements
//! - Nested sub-models, each registered as an independent model
//! - Carry-over of `description`, `required` and `pattern` metadata
//! - Reserved-name exclusion (field names containing `__` are skipped)

pub mod names;
pub mod type_mapper;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::TranslateError;
use crate::fields::{ApiField, FieldKind, ListField, ModelHandle, NestedField, PrimitiveField};
use crate::ir::{FieldSpec, FieldType, ModelSpec};
use crate::registry::ModelRegistry;

pub use names::derive_model_name;
pub use type_mapper::FieldKindMapper;

/// Policy for declared types the mapper cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
    /// Resolve unknown types to the `String` kind
    #[default]
    FallbackToString,

    /// Fail translation with an `UnresolvedType` error
    Reject,
}

/// Translator configuration options.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// How to treat declared types with no viable kind
    pub unknown_types: UnknownTypePolicy,

    /// Whether carried patterns must compile as regular expressions
    pub validate_patterns: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            unknown_types: UnknownTypePolicy::default(),
            validate_patterns: true,
        }
    }
}

impl TranslatorConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown-type policy.
    pub fn with_unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    /// Set whether carried patterns must compile.
    pub fn with_validate_patterns(mut self, validate: bool) -> Self {
        self.validate_patterns = validate;
        self
    }
}

/// Translates source models into registered REST field models.
///
/// The translator holds no mutable state; each call walks the given model
/// and hands the result to the registry. Repeated translation of the same
/// model yields structurally equal, freshly allocated models.
///
/// # Example
///
/// ```rust
/// use restfields::{
///     FieldSpec, FieldType, InMemoryRegistry, Translator,
/// };
///
/// let customer = restfields::ModelSpec::new("Customer")
///     .with_field(FieldSpec::new("name", FieldType::Text))
///     .with_field(FieldSpec::new("age", FieldType::optional(FieldType::Integer)));
///
/// let mut registry = InMemoryRegistry::new();
/// let model = Translator::new().translate(&customer, &mut registry).unwrap();
/// assert_eq!(model.name, "customer");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
    /// Kind mapper for primitive resolution
    mapper: FieldKindMapper,

    /// Translation options
    config: TranslatorConfig,
}

impl Translator {
    /// Create a new translator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with the given configuration.
    pub fn with_config(config: TranslatorConfig) -> Self {
        Self {
            mapper: FieldKindMapper::new(),
            config,
        }
    }

    /// Create a translator with a custom kind mapper.
    pub fn with_mapper(mapper: FieldKindMapper) -> Self {
        Self {
            mapper,
            config: TranslatorConfig::default(),
        }
    }

    /// Translate a source model and register the result.
    ///
    /// Every non-reserved field produces exactly one descriptor under the
    /// same name. Nested sub-models are translated recursively, each causing
    /// its own registration. Unions are unwrapped one level: null members
    /// clear the required flag and the first remaining member is taken —
    /// multi-member unions beyond that are not resolved further.
    pub fn translate(
        &self,
        model: &ModelSpec,
        registry: &mut dyn ModelRegistry,
    ) -> Result<ModelHandle, TranslateError> {
        let mut fields = Vec::with_capacity(model.fields.len());

        for field in &model.fields {
            if field.name.contains("__") {
                trace!(model = %model.ident, field = %field.name, "skipping reserved field");
                continue;
            }
            let descriptor = self.translate_field(model, field, registry)?;
            fields.push((field.name.clone(), descriptor));
        }

        let name = names::registered_name(model);
        debug!(
            model = %model.ident,
            registered = %name,
            fields = fields.len(),
            "translated model"
        );
        registry.register(&name, fields)
    }

    /// Translate a single field into its target descriptor.
    fn translate_field(
        &self,
        model: &ModelSpec,
        field: &FieldSpec,
        registry: &mut dyn ModelRegistry,
    ) -> Result<ApiField, TranslateError> {
        let info = field.info.as_ref();
        let mut required = info.map(|i| i.required).unwrap_or(true);
        let description = info.and_then(|i| i.description.clone());
        let pattern = info.and_then(|i| i.pattern.clone());

        if self.config.validate_patterns {
            if let Some(p) = &pattern {
                if let Err(err) = Regex::new(p) {
                    return Err(TranslateError::MalformedMetadata {
                        model: model.ident.clone(),
                        field: field.name.clone(),
                        reason: format!("pattern does not compile: {}", err),
                    });
                }
            }
        }

        // One level of optional unwrapping: null members clear the required
        // flag, then the first remaining member stands in for the union.
        let mut declared = &field.ty;
        if let FieldType::Union(members) = declared {
            let payload: Vec<&FieldType> = members.iter().filter(|m| !m.is_null()).collect();
            if payload.len() < members.len() {
                required = false;
            }
            declared = payload
                .first()
                .copied()
                .ok_or_else(|| TranslateError::UnresolvedType {
                    model: model.ident.clone(),
                    field: field.name.clone(),
                    ty: field.ty.to_string(),
                })?;
        }

        match declared {
            FieldType::List(item) => {
                let kind = self.resolve_kind(model, field, item)?;
                let item = PrimitiveField {
                    kind,
                    read_only: false,
                    description,
                    required,
                    pattern,
                };
                Ok(ApiField::List(ListField::new(item)))
            }
            FieldType::Model(spec) => {
                let nested = self.translate(spec, registry)?;
                Ok(ApiField::Nested(NestedField::new(nested)))
            }
            other => {
                let kind = self.resolve_kind(model, field, other)?;
                Ok(ApiField::Primitive(PrimitiveField {
                    kind,
                    read_only: false,
                    description,
                    required,
                    pattern,
                }))
            }
        }
    }

    /// Resolve a declared type to a target kind under the configured policy.
    fn resolve_kind(
        &self,
        model: &ModelSpec,
        field: &FieldSpec,
        ty: &FieldType,
    ) -> Result<FieldKind, TranslateError> {
        match self.config.unknown_types {
            UnknownTypePolicy::FallbackToString => Ok(self.mapper.map_kind(ty)),
            UnknownTypePolicy::Reject => {
                self.mapper
                    .try_map_kind(ty)
                    .ok_or_else(|| TranslateError::UnresolvedType {
                        model: model.ident.clone(),
                        field: field.name.clone(),
                        ty: ty.to_string(),
                    })
            }
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::registry::InMemoryRegistry;
    use proptest::prelude::*;

    /// Strategy for generating field names without the reserved marker.
    fn arb_field_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,11}".prop_map(|s| s)
    }

    /// Strategy for generating arbitrary primitive field types.
    fn arb_primitive_field_type() -> impl Strategy<Value = FieldType> {
        prop_oneof![
            Just(FieldType::Integer),
            Just(FieldType::Float),
            Just(FieldType::Decimal),
            Just(FieldType::Boolean),
            Just(FieldType::DateTime),
            Just(FieldType::Date),
            Just(FieldType::Text),
        ]
    }

    proptest! {
        /// Every non-reserved field appears exactly once in the output,
        /// under the same name and in declaration order.
        #[test]
        fn prop_fields_preserved_in_order(
            names in proptest::collection::vec(arb_field_name(), 1..6),
            ty in arb_primitive_field_type()
        ) {
            let mut unique = names.clone();
            unique.sort();
            unique.dedup();
            prop_assume!(unique.len() == names.len());

            let mut model = ModelSpec::new("Sample");
            for name in &names {
                model = model.with_field(FieldSpec::new(name.as_str(), ty.clone()));
            }

            let mut registry = InMemoryRegistry::new();
            let translated = Translator::new().translate(&model, &mut registry).unwrap();

            let out: Vec<&str> = translated.field_names().collect();
            let expected: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
            prop_assert_eq!(out, expected);
        }

        /// Fields whose name contains the reserved marker never appear.
        #[test]
        fn prop_reserved_fields_excluded(
            kept in arb_field_name(),
            reserved_stem in arb_field_name()
        ) {
            prop_assume!(kept != reserved_stem);
            let reserved = format!("__{}", reserved_stem);

            let model = ModelSpec::new("Sample")
                .with_field(FieldSpec::new(kept.as_str(), FieldType::Text))
                .with_field(FieldSpec::new(reserved.as_str(), FieldType::Text));

            let mut registry = InMemoryRegistry::new();
            let translated = Translator::new().translate(&model, &mut registry).unwrap();

            prop_assert!(translated.contains(&kept));
            prop_assert!(!translated.contains(&reserved));
            prop_assert_eq!(translated.len(), 1);
        }

        /// Optional wrapping always clears the required flag and resolves to
        /// the payload's kind.
        #[test]
        fn prop_optional_clears_required(ty in arb_primitive_field_type()) {
            let mapper = FieldKindMapper::new();
            let expected_kind = mapper.map_kind(&ty);

            let model = ModelSpec::new("Sample")
                .with_field(FieldSpec::new("value", FieldType::optional(ty)));

            let mut registry = InMemoryRegistry::new();
            let translated = Translator::new().translate(&model, &mut registry).unwrap();

            let field = translated.get("value").unwrap().as_primitive().unwrap();
            prop_assert!(!field.required);
            prop_assert_eq!(field.kind, expected_kind);
        }
    }
}
