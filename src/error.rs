//! Error types for schema translation.
//!
//! Failures during translation surface as a single structured error carrying
//! the offending model and field names, rather than leaking as panics or
//! lookup failures.

use thiserror::Error;

/// Error produced while translating a source model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// A declared type reached the mapper with no viable target kind while
    /// the strict unknown-type policy was active.
    #[error("no field kind for `{model}.{field}`: {ty} has no mapping")]
    UnresolvedType {
        /// Source model identifier
        model: String,
        /// Offending field name
        field: String,
        /// Rendering of the declared type
        ty: String,
    },

    /// Field metadata was present but unusable.
    #[error("field info for `{model}.{field}` is unusable: {reason}")]
    MalformedMetadata {
        /// Source model identifier
        model: String,
        /// Offending field name
        field: String,
        /// What made the metadata unusable
        reason: String,
    },

    /// A model name was re-registered with a different field layout while
    /// the registry's collision check was active.
    #[error("model `{name}` is already registered with a different field layout")]
    NameCollision {
        /// The contested registration name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_type_display() {
        let err = TranslateError::UnresolvedType {
            model: "Customer".to_string(),
            field: "location".to_string(),
            ty: "GeoPoint".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no field kind for `Customer.location`: GeoPoint has no mapping"
        );
    }

    #[test]
    fn test_malformed_metadata_display() {
        let err = TranslateError::MalformedMetadata {
            model: "Customer".to_string(),
            field: "code".to_string(),
            reason: "pattern does not compile".to_string(),
        };
        assert!(err.to_string().contains("`Customer.code`"));
        assert!(err.to_string().contains("pattern does not compile"));
    }

    #[test]
    fn test_name_collision_display() {
        let err = TranslateError::NameCollision {
            name: "customer".to_string(),
        };
        assert!(err.to_string().contains("`customer`"));
    }
}
