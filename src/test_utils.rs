//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a single file name with no dot (lowercase alphanumeric, `-`, `_`)
    pub fn file_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,15}"
    }

    /// Generate an absolute path of one to five segments; segments may contain dots
    pub fn path_segments() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-z0-9_-]{1,8}(\\.[a-z0-9]{1,4})?", 1..=5)
            .prop_map(|segments| format!("/{}", segments.join("/")))
    }

    /// Generate a relative directory chain of one to four segments
    pub fn relative_dir_chain() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-z][a-z0-9]{0,7}", 1..=4)
    }

    /// Generate arbitrary file content
    pub fn file_content() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(any::<u8>(), 0..1024)
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_file_name_generator(name in file_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('.'));
            prop_assert!(!name.contains('/'));
        }

        #[test]
        fn test_path_segments_generator(path in path_segments()) {
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.ends_with('/'));
            prop_assert!(!path.contains("//"));
        }

        #[test]
        fn test_relative_dir_chain_generator(chain in relative_dir_chain()) {
            prop_assert!(!chain.is_empty());
            prop_assert!(chain.iter().all(|s| !s.is_empty() && !s.contains('/')));
        }
    }
}
