//! Registration name derivation.
//!
//! Translated models register under an explicit display-name override when
//! the source model carries one, otherwise under a snake-case rendering of
//! the model identifier.

use crate::ir::ModelSpec;

/// Derive a registration name from a camel-case model identifier.
///
/// Each uppercase letter not at the start is preceded by an underscore and
/// the whole string is lowercased: `CustomerOrder` becomes `customer_order`.
/// The split is strictly per uppercase letter, so acronym runs stay split
/// (`HTTPServer` becomes `h_t_t_p_server`).
pub fn derive_model_name(ident: &str) -> String {
    let mut name = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() && i != 0 {
            name.push('_');
        }
        for lower in ch.to_lowercase() {
            name.push(lower);
        }
    }
    name
}

/// The name a model registers under: the explicit override if present,
/// otherwise the derived name.
pub fn registered_name(model: &ModelSpec) -> String {
    match &model.display_name {
        Some(name) => name.clone(),
        None => derive_model_name(&model.ident),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_two_words() {
        assert_eq!(derive_model_name("CustomerOrder"), "customer_order");
    }

    #[test]
    fn test_derive_single_word() {
        assert_eq!(derive_model_name("Customer"), "customer");
    }

    #[test]
    fn test_derive_already_lowercase() {
        assert_eq!(derive_model_name("customer"), "customer");
    }

    #[test]
    fn test_derive_acronym_splits_per_letter() {
        assert_eq!(derive_model_name("HTTPServer"), "h_t_t_p_server");
    }

    #[test]
    fn test_derive_empty() {
        assert_eq!(derive_model_name(""), "");
    }

    #[test]
    fn test_registered_name_prefers_override() {
        let model = ModelSpec::new("Customer").with_display_name("client");
        assert_eq!(registered_name(&model), "client");
    }

    #[test]
    fn test_registered_name_derives_without_override() {
        let model = ModelSpec::new("CustomerOrder");
        assert_eq!(registered_name(&model), "customer_order");
    }
}
