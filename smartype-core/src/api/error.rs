//! Error types for the API
//!
//! The rewrite engine itself cannot fail. Errors only arise when building
//! options from user input or when the fragment helper detects a broken
//! caller precondition.

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Separator string could not be parsed
    #[error("Invalid separator: {0}")]
    InvalidSeparator(String),

    /// Unknown pass name
    #[error("Unknown pass: {0}")]
    UnknownPass(String),

    /// A fragment already contains the separator character
    #[error("Fragment {fragment} contains the separator character")]
    SeparatorInContent {
        /// Index of the offending fragment
        fragment: usize,
    },

    /// Splitting the rewritten text did not give back one piece per fragment
    #[error("Expected {expected} fragments after rewriting, found {found}")]
    FragmentMismatch {
        /// Number of fragments passed in
        expected: usize,
        /// Number of pieces after splitting on the separator
        found: usize,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::Configuration("bad".into()).to_string(),
            "Configuration error: bad"
        );
        assert_eq!(
            Error::SeparatorInContent { fragment: 2 }.to_string(),
            "Fragment 2 contains the separator character"
        );
        assert_eq!(
            Error::FragmentMismatch {
                expected: 3,
                found: 2
            }
            .to_string(),
            "Expected 3 fragments after rewriting, found 2"
        );
    }
}
