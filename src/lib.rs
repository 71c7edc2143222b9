//! # restfields
//!
//! A Rust crate for translating declarative data-model schemas into REST API
//! field models.
//!
//! This crate is a schema-to-schema compiler: it takes the description of a
//! typed source model (named fields with semantic types, optionality and
//! validation metadata) and produces the equivalent description in a REST
//! documentation vocabulary (primitive field descriptors with collection and
//! nested markers), registering the result — and any nested models it
//! synthesizes along the way — into a model registry. It operates purely on
//! type and metadata information and never touches data instances.
//!
//! ## Quick Start
//!
//! ```rust
//! use restfields::{
//!     FieldInfo, FieldSpec, FieldType, InMemoryRegistry, ModelSpec, Translator,
//! };
//!
//! let address = ModelSpec::new("Address")
//!     .with_field(FieldSpec::new("street", FieldType::Text))
//!     .with_field(FieldSpec::new(
//!         "zip",
//!         FieldType::Text,
//!     ).with_info(FieldInfo::new().with_pattern("^\\d{5}$")));
//!
//! let customer = ModelSpec::new("Customer")
//!     .with_field(FieldSpec::new("name", FieldType::Text))
//!     .with_field(FieldSpec::new("age", FieldType::optional(FieldType::Integer)))
//!     .with_field(FieldSpec::new("address", FieldType::model(address)));
//!
//! let mut registry = InMemoryRegistry::new();
//! let model = Translator::new().translate(&customer, &mut registry).unwrap();
//!
//! // The nested model registered on its own.
//! assert_eq!(model.name, "customer");
//! assert!(registry.contains("address"));
//! ```
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `chrono` | `AsFieldType` support for `chrono` date/datetime types | ❌ |
//! | `uuid` | `AsFieldType` support for `uuid::Uuid` | ❌ |
//!
//! ## Kind Mappings
//!
//! | Source type | Target kind |
//! |-------------|-------------|
//! | integer | `Integer` |
//! | float, decimal | `Float` |
//! | boolean | `Boolean` |
//! | datetime | `DateTime` |
//! | date | `Date` |
//! | anything else | `String` |
//!
//! The `String` fallback makes kind resolution total; switch the translator
//! to [`UnknownTypePolicy::Reject`] to surface unmapped types as errors
//! instead.
//!
//! ## Translation Rules
//!
//! - A union with a null member unwraps one level: the required flag clears
//!   and the first remaining member stands in for the union.
//! - Collections carry their metadata on the element descriptor; only
//!   primitive elements are supported.
//! - Nested sub-models translate recursively and register independently;
//!   the parent field holds a reference to the registered model.
//! - Field names containing `__` are reserved and skipped.
//! - Registration names come from the model's display-name override, or the
//!   snake-case rendering of its identifier (`CustomerOrder` →
//!   `customer_order`).
//!
//! ## Describing Models with Rust Types
//!
//! Source models can be written by hand as [`ModelSpec`] values or derived
//! from Rust types via the [`ModelDescription`] trait and
//! [`FieldSpec::of`]:
//!
//! ```rust
//! use restfields::{FieldSpec, ModelDescription};
//!
//! struct Customer;
//!
//! impl ModelDescription for Customer {
//!     fn ident() -> &'static str {
//!         "Customer"
//!     }
//!
//!     fn fields() -> Vec<FieldSpec> {
//!         vec![
//!             FieldSpec::of::<String>("name"),
//!             FieldSpec::of::<Option<i64>>("age"),
//!             FieldSpec::of::<Vec<f64>>("scores"),
//!         ]
//!     }
//! }
//!
//! let spec = Customer::spec();
//! ```

pub mod describe;
pub mod error;
pub mod fields;
pub mod ir;
pub mod registry;
pub mod translate;

// Re-export the public surface
pub use describe::{AsFieldType, ModelDescription};
pub use error::TranslateError;
pub use fields::{
    ApiField, ApiModel, FieldKind, ListField, ModelHandle, NestedField, PrimitiveField,
};
pub use ir::{FieldInfo, FieldSpec, FieldType, ModelSpec};
pub use registry::{InMemoryRegistry, ModelRegistry};
pub use translate::{
    derive_model_name, FieldKindMapper, Translator, TranslatorConfig, UnknownTypePolicy,
};
