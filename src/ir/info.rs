//! Field metadata definitions.
//!
//! Metadata carried on a source field: the matching pattern, a free-text
//! description and the required flag. Only this subset survives translation.

use serde::{Deserialize, Serialize};

/// Validation/presentation metadata of a source field.
///
/// A field with no metadata at all is treated as `required = true` with no
/// pattern and no description; `FieldInfo::new()` mirrors those defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Matching rule the field value must satisfy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the field must be present
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl Default for FieldInfo {
    fn default() -> Self {
        Self {
            pattern: None,
            description: None,
            required: true,
        }
    }
}

impl FieldInfo {
    /// Create empty metadata with the default required flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matching pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
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

    /// Check if this metadata carries anything beyond the defaults.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none() && self.description.is_none() && self.required
    }
}
