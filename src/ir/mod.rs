//! Source model representation.
//!
//! This module defines the target-agnostic data structures that describe a
//! source data model: models, fields, declared types and field metadata.
//! The translator consumes these to produce REST field models.

pub mod info;
pub mod model;
pub mod types;

pub use info::FieldInfo;
pub use model::{FieldSpec, ModelSpec};
pub use types::FieldType;
