//! Target field model definitions.
//!
//! This module defines the REST-side schema vocabulary produced by the
//! translator: primitive field descriptors, collection and nested wrappers,
//! and the registered model that groups them.
//!
//! Primitive descriptors serialize to the shape consumed by downstream
//! presentation layers:
//!
//! ```json
//! { "kind": "Integer", "readOnly": false, "description": "...", "required": true, "pattern": "..." }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shared handle to a registered model.
///
/// Handed out by the registry; nested descriptors hold one of these rather
/// than embedding the model inline.
pub type ModelHandle = Arc<ApiModel>;

/// Primitive kind of a target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Whole number
    Integer,

    /// Floating point or decimal number
    Float,

    /// True/false value
    Boolean,

    /// Date and time of day
    DateTime,

    /// Calendar date only
    Date,

    /// Free text, also the universal fallback
    String,
}

impl FieldKind {
    /// Get the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Integer => "Integer",
            FieldKind::Float => "Float",
            FieldKind::Boolean => "Boolean",
            FieldKind::DateTime => "DateTime",
            FieldKind::Date => "Date",
            FieldKind::String => "String",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive target field descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveField {
    /// Primitive kind
    pub kind: FieldKind,

    /// Whether the field is read-only in the target system
    pub read_only: bool,

    /// Free-text description carried over from the source field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the field must be present
    pub required: bool,

    /// Matching rule carried over from the source field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl PrimitiveField {
    /// Create a descriptor of the given kind with default metadata.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            read_only: false,
            description: None,
            required: true,
            pattern: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the matching pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the read-only flag.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

/// Collection target field descriptor, wrapping one primitive descriptor.
///
/// The carried metadata lives on the element descriptor, matching how the
/// target vocabulary attaches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListField {
    /// Element descriptor
    pub item: PrimitiveField,
}

impl ListField {
    /// Create a collection descriptor around the given element.
    pub fn new(item: PrimitiveField) -> Self {
        Self { item }
    }
}

/// Nested target field descriptor, referencing another registered model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedField {
    /// The referenced target model
    pub model: ModelHandle,
}

impl NestedField {
    /// Create a nested descriptor referencing the given model.
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }
}

/// A target field descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ApiField {
    /// Primitive descriptor
    Primitive(PrimitiveField),

    /// Collection of a primitive element
    List(ListField),

    /// Nested sub-model reference
    Nested(NestedField),
}

impl ApiField {
    /// Check if this is a primitive descriptor.
    pub fn is_primitive(&self) -> bool {
        matches!(self, ApiField::Primitive(_))
    }

    /// Check if this is a collection descriptor.
    pub fn is_list(&self) -> bool {
        matches!(self, ApiField::List(_))
    }

    /// Check if this is a nested descriptor.
    pub fn is_nested(&self) -> bool {
        matches!(self, ApiField::Nested(_))
    }

    /// Get the primitive descriptor, if this is one.
    pub fn as_primitive(&self) -> Option<&PrimitiveField> {
        match self {
            ApiField::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// Get the collection descriptor, if this is one.
    pub fn as_list(&self) -> Option<&ListField> {
        match self {
            ApiField::List(l) => Some(l),
            _ => None,
        }
    }

    /// Get the nested descriptor, if this is one.
    pub fn as_nested(&self) -> Option<&NestedField> {
        match self {
            ApiField::Nested(n) => Some(n),
            _ => None,
        }
    }
}

/// A registered target model: a name plus an ordered field mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModel {
    /// Registered model name
    pub name: String,

    /// Field descriptors in source declaration order
    pub fields: Vec<(String, ApiField)>,
}

impl ApiModel {
    /// Create a new model with the given name and fields.
    pub fn new(name: impl Into<String>, fields: Vec<(String, ApiField)>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Look up a field descriptor by name.
    pub fn get(&self, name: &str) -> Option<&ApiField> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, descriptor)| descriptor)
    }

    /// Check if a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the model has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
