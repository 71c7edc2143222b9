//! Field type definitions.
//!
//! This module defines the type descriptors that appear on source model
//! fields. The descriptors are target-agnostic and are consumed by the
//! translator to produce REST field models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::ModelSpec;

/// Declared type of a source model field.
///
/// Covers the semantic primitives, homogeneous collections, unions
/// (including the null member used for optionality) and nested sub-models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FieldType {
    // ==========================================================================
    // Primitives
    // ==========================================================================
    /// Integer type
    Integer,

    /// Floating point type
    Float,

    /// Fixed-point decimal type
    Decimal,

    /// Boolean type
    Boolean,

    /// Date and time of day
    DateTime,

    /// Calendar date only
    Date,

    /// Free text
    Text,

    /// Named type with no built-in mapping rule
    Custom(String),

    // ==========================================================================
    // Compound Types
    // ==========================================================================
    /// Homogeneous collection of an element type
    List(Box<FieldType>),

    /// Union of multiple alternatives; `Null` as a member marks optionality
    Union(Vec<FieldType>),

    /// Null/none type, only meaningful as a union member
    Null,

    // ==========================================================================
    // Nested Models
    // ==========================================================================
    /// Nested sub-model, carried by value so repeated references stay
    /// independent descriptions
    Model(Box<ModelSpec>),
}

impl FieldType {
    /// Create an optional type: a union of the payload type and null.
    pub fn optional(inner: FieldType) -> Self {
        FieldType::Union(vec![inner, FieldType::Null])
    }

    /// Create a collection of the given element type.
    pub fn list(item: FieldType) -> Self {
        FieldType::List(Box::new(item))
    }

    /// Create a nested sub-model type.
    pub fn model(spec: ModelSpec) -> Self {
        FieldType::Model(Box::new(spec))
    }

    /// Create a named custom type.
    pub fn custom(name: impl Into<String>) -> Self {
        FieldType::Custom(name.into())
    }

    /// Check if this is one of the built-in primitive types.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            FieldType::Integer
                | FieldType::Float
                | FieldType::Decimal
                | FieldType::Boolean
                | FieldType::DateTime
                | FieldType::Date
                | FieldType::Text
        )
    }

    /// Check if this is the null type.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldType::Null)
    }

    /// Check if this is a collection type.
    pub fn is_list(&self) -> bool {
        matches!(self, FieldType::List(_))
    }

    /// Check if this is a nested sub-model type.
    pub fn is_model(&self) -> bool {
        matches!(self, FieldType::Model(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Integer => write!(f, "integer"),
            FieldType::Float => write!(f, "float"),
            FieldType::Decimal => write!(f, "decimal"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::DateTime => write!(f, "datetime"),
            FieldType::Date => write!(f, "date"),
            FieldType::Text => write!(f, "text"),
            FieldType::Null => write!(f, "null"),
            FieldType::Custom(name) => write!(f, "{}", name),
            FieldType::List(item) => write!(f, "list<{}>", item),
            FieldType::Union(members) => {
                write!(f, "union<")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, ">")
            }
            FieldType::Model(spec) => write!(f, "model {}", spec.ident),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_is_union_with_null() {
        let ty = FieldType::optional(FieldType::Integer);
        match ty {
            FieldType::Union(members) => {
                assert_eq!(members, vec![FieldType::Integer, FieldType::Null]);
            }
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_primitive_predicates() {
        assert!(FieldType::Integer.is_primitive());
        assert!(FieldType::Decimal.is_primitive());
        assert!(FieldType::Text.is_primitive());
        assert!(!FieldType::Null.is_primitive());
        assert!(!FieldType::custom("GeoPoint").is_primitive());
        assert!(!FieldType::list(FieldType::Float).is_primitive());
    }

    #[test]
    fn test_compound_predicates() {
        assert!(FieldType::list(FieldType::Float).is_list());
        assert!(FieldType::Null.is_null());
        assert!(FieldType::model(ModelSpec::new("Address")).is_model());
        assert!(!FieldType::Integer.is_model());
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldType::Integer.to_string(), "integer");
        assert_eq!(FieldType::list(FieldType::Float).to_string(), "list<float>");
        assert_eq!(
            FieldType::optional(FieldType::Text).to_string(),
            "union<text | null>"
        );
        assert_eq!(FieldType::custom("GeoPoint").to_string(), "GeoPoint");
        assert_eq!(
            FieldType::model(ModelSpec::new("Address")).to_string(),
            "model Address"
        );
    }
}
