//! Source type to field kind mappings.
//!
//! This module handles mapping declared source types to their target
//! primitive kinds. It provides the [`FieldKindMapper`] struct used as the
//! leaf step of field translation.
//!
//! # Kind Mappings
//!
//! | Source type | Target kind |
//! |-------------|-------------|
//! | integer | `Integer` |
//! | float, decimal | `Float` |
//! | boolean | `Boolean` |
//! | datetime | `DateTime` |
//! | date | `Date` |
//! | text | `String` |
//! | custom (with override) | the override kind |
//! | anything else | `String` |

use std::collections::HashMap;

use crate::fields::FieldKind;
use crate::ir::FieldType;

/// Maps declared source types to target field kinds.
///
/// [`map_kind`](FieldKindMapper::map_kind) is total: any type without a
/// mapping resolves to the `String` fallback, so the mapper itself never
/// fails. [`try_map_kind`](FieldKindMapper::try_map_kind) is the strict
/// variant used when callers opt out of the fallback.
///
/// # Example
///
/// ```rust
/// use restfields::{FieldKind, FieldKindMapper, FieldType};
///
/// let mapper = FieldKindMapper::new();
/// assert_eq!(mapper.map_kind(&FieldType::Integer), FieldKind::Integer);
/// assert_eq!(mapper.map_kind(&FieldType::custom("GeoPoint")), FieldKind::String);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldKindMapper {
    /// Custom type overrides (source type name -> target kind)
    overrides: HashMap<String, FieldKind>,
}

impl FieldKindMapper {
    /// Create a new mapper with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with custom type overrides.
    pub fn with_overrides(overrides: HashMap<String, FieldKind>) -> Self {
        Self { overrides }
    }

    /// Add a custom type override.
    pub fn add_override(&mut self, source_type: impl Into<String>, kind: FieldKind) {
        self.overrides.insert(source_type.into(), kind);
    }

    /// Map a declared type to its target kind, falling back to `String`
    /// for anything without a mapping.
    pub fn map_kind(&self, ty: &FieldType) -> FieldKind {
        self.try_map_kind(ty).unwrap_or(FieldKind::String)
    }

    /// Map a declared type to its target kind, or `None` if the type is not
    /// a mappable primitive (collections, nested models, unions, null, and
    /// custom types without an override).
    pub fn try_map_kind(&self, ty: &FieldType) -> Option<FieldKind> {
        match ty {
            FieldType::Integer => Some(FieldKind::Integer),
            FieldType::Float | FieldType::Decimal => Some(FieldKind::Float),
            FieldType::Boolean => Some(FieldKind::Boolean),
            FieldType::DateTime => Some(FieldKind::DateTime),
            FieldType::Date => Some(FieldKind::Date),
            FieldType::Text => Some(FieldKind::String),
            FieldType::Custom(name) => self.overrides.get(name).copied(),
            _ => None,
        }
    }
}
