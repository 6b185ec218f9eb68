//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use crate::core::category::Category;
    use proptest::prelude::*;

    /// Generate a valid module or preset name
    pub fn module_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,20}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate any category
    pub fn category() -> impl Strategy<Value = Category> {
        proptest::sample::select(Category::ALL.to_vec())
    }

    /// Generate a label that is accepted for artifact names
    pub fn label() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-]{1,16}"
    }

    /// Generate a single-line header value (purpose or author)
    pub fn header_text() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ,.()-]{0,40}"
    }

    /// Generate a few lines of module body
    pub fn module_body() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-z.]{1,12} = (true|false|\"[a-z]{0,6}\");", 0..6)
            .prop_map(|lines| lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::artifact::validate_label;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_module_name_generator(name in module_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_label_generator(label in label()) {
            prop_assert!(validate_label(&label).is_ok());
        }

        #[test]
        fn test_header_text_is_single_line(text in header_text()) {
            prop_assert!(!text.contains('\n'));
        }
    }
}
