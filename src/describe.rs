//! Core traits for describing source models.
//!
//! This module defines the [`ModelDescription`] trait, the explicit
//! capability interface a source model type implements so the translator can
//! enumerate its fields, and the [`AsFieldType`] trait mapping common Rust
//! types to declared field types.
//!
//! ## Overview
//!
//! `ModelDescription` replaces ad-hoc reflection with an explicit contract:
//! a model names itself, optionally overrides its registration name, and
//! returns its fields in declaration order. The provided
//! [`spec`](ModelDescription::spec) method assembles the value-level
//! [`ModelSpec`] the translator consumes.
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
//!         ]
//!     }
//! }
//!
//! let spec = Customer::spec();
//! assert_eq!(spec.ident, "Customer");
//! assert_eq!(spec.fields.len(), 2);
//! ```
//!
//! ## Blanket Implementations
//!
//! `AsFieldType` is implemented for:
//!
//! - **Primitives**: `String`, `&str`, `bool`, integers (`i8`-`i128`,
//!   `u8`-`u128`, `isize`, `usize`), floats (`f32`, `f64`)
//! - **Compounds**: `Option<T>`, `Vec<T>`
//! - **Feature-gated**: `chrono` date/datetime types (`chrono` feature),
//!   `uuid::Uuid` (`uuid` feature)

use crate::ir::{FieldSpec, FieldType, ModelSpec};

/// Trait for types that describe a source model.
///
/// Implement this for each model type that should be translatable. The
/// capability set is deliberately small: an identifier, an optional
/// registration-name override, and the ordered field list.
pub trait ModelDescription {
    /// The model's camel-case identifier (e.g. "CustomerOrder").
    fn ident() -> &'static str;

    /// Explicit registration-name override, if any.
    fn display_name() -> Option<&'static str> {
        None
    }

    /// The model's fields in declaration order.
    fn fields() -> Vec<FieldSpec>;

    /// Assemble the value-level model description.
    fn spec() -> ModelSpec {
        let mut spec = ModelSpec::new(Self::ident()).with_fields(Self::fields());
        if let Some(name) = Self::display_name() {
            spec = spec.with_display_name(name);
        }
        spec
    }
}

/// Trait for Rust types with a natural declared field type.
///
/// Used through [`FieldSpec::of`] to declare fields from Rust types instead
/// of spelling out [`FieldType`] values.
pub trait AsFieldType {
    /// The declared type this Rust type corresponds to.
    fn field_type() -> FieldType;
}

impl FieldSpec {
    /// Create a field whose declared type is taken from a Rust type.
    pub fn of<T: AsFieldType>(name: impl Into<String>) -> Self {
        FieldSpec::new(name, T::field_type())
    }
}

// =============================================================================
// Primitive implementations
// =============================================================================

impl AsFieldType for String {
    fn field_type() -> FieldType {
        FieldType::Text
    }
}

impl AsFieldType for &str {
    fn field_type() -> FieldType {
        FieldType::Text
    }
}

impl AsFieldType for bool {
    fn field_type() -> FieldType {
        FieldType::Boolean
    }
}

macro_rules! impl_as_field_type_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldType for $ty {
                fn field_type() -> FieldType {
                    FieldType::Integer
                }
            }
        )*
    };
}

impl_as_field_type_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_as_field_type_for_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldType for $ty {
                fn field_type() -> FieldType {
                    FieldType::Float
                }
            }
        )*
    };
}

impl_as_field_type_for_float!(f32, f64);

// =============================================================================
// Compound implementations
// =============================================================================

impl<T: AsFieldType> AsFieldType for Option<T> {
    fn field_type() -> FieldType {
        FieldType::optional(T::field_type())
    }
}

impl<T: AsFieldType> AsFieldType for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::list(T::field_type())
    }
}

// =============================================================================
// Feature-gated implementations
// =============================================================================

#[cfg(feature = "chrono")]
impl AsFieldType for chrono::NaiveDate {
    fn field_type() -> FieldType {
        FieldType::Date
    }
}

#[cfg(feature = "chrono")]
impl AsFieldType for chrono::NaiveDateTime {
    fn field_type() -> FieldType {
        FieldType::DateTime
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> AsFieldType for chrono::DateTime<Tz> {
    fn field_type() -> FieldType {
        FieldType::DateTime
    }
}

#[cfg(feature = "uuid")]
impl AsFieldType for uuid::Uuid {
    fn field_type() -> FieldType {
        FieldType::Text
    }
}

// =============================================================================
// Tests
// =============================================================================
