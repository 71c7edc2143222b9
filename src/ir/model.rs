//! Source model definitions.
//!
//! This module defines the root structures that describe a source data
//! model: the model itself and its ordered fields.

use serde::{Deserialize, Serialize};

use super::info::FieldInfo;
use super::types::FieldType;

/// Description of a source data model.
///
/// A model is a named, ordered collection of fields. The `ident` is the
/// model's camel-case identifier; `display_name` optionally overrides the
/// name the translated model is registered under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Model identifier (e.g. "CustomerOrder")
    pub ident: String,

    /// Explicit registration-name override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl ModelSpec {
    /// Create a new model description with the given identifier.
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            display_name: None,
            fields: Vec::new(),
        }
    }

    /// Override the name the translated model is registered under.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace the field list.
    pub fn with_fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A single field of a source model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique within the model
    pub name: String,

    /// Declared type
    pub ty: FieldType,

    /// Validation/presentation metadata, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<FieldInfo>,
}

impl FieldSpec {
    /// Create a new field with the given name and declared type.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            info: None,
        }
    }

    /// Attach field metadata.
    pub fn with_info(mut self, info: FieldInfo) -> Self {
        self.info = Some(info);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_spec_creation() {
        let spec = ModelSpec::new("Customer");
        assert_eq!(spec.ident, "Customer");
        assert!(spec.display_name.is_none());
        assert!(spec.fields.is_empty());
    }

    #[test]
    fn test_model_spec_builder() {
        let spec = ModelSpec::new("Customer")
            .with_display_name("client")
            .with_field(FieldSpec::new("name", FieldType::Text))
            .with_field(FieldSpec::new("age", FieldType::Integer));

        assert_eq!(spec.display_name.as_deref(), Some("client"));
        assert_eq!(spec.fields.len(), 2);
        assert_eq!(spec.fields[0].name, "name");
        assert_eq!(spec.fields[1].name, "age");
    }

    #[test]
    fn test_field_lookup() {
        let spec = ModelSpec::new("Customer").with_field(FieldSpec::new("age", FieldType::Integer));
        assert!(spec.field("age").is_some());
        assert!(spec.field("missing").is_none());
    }

    #[test]
    fn test_field_spec_with_info() {
        let field = FieldSpec::new("code", FieldType::Text)
            .with_info(FieldInfo::new().with_pattern("^[A-Z]{3}$"));

        assert_eq!(field.name, "code");
        assert!(field.info.is_some());
        assert_eq!(
            field.info.unwrap().pattern.as_deref(),
            Some("^[A-Z]{3}$")
        );
    }
}
