//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while decoding or checking a library description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The document does not have the shape of a library description.
    #[error("malformed configuration: {0}")]
    Malformed(String),

    /// The library name is empty or not safe to use as a directory name.
    #[error("invalid library name '{0}': use ASCII letters, digits, '_' or '-'")]
    InvalidLibraryName(String),

    /// A module name cannot be used as a file stem and C identifier.
    #[error("invalid module name '{name}': must be a C identifier")]
    InvalidModuleName {
        /// Position of the module in the configuration.
        index: usize,
        /// The rejected name.
        name: String,
    },

    /// Two modules share a name.
    #[error("duplicate module name '{name}'")]
    DuplicateModule {
        /// Position of the second occurrence.
        index: usize,
        /// The repeated name.
        name: String,
    },

    /// The test framework identifier is not a single path segment.
    #[error("invalid test framework identifier '{0}'")]
    InvalidTestFramework(String),
}

impl DomainError {
    /// JSON pointer to the offending part of the configuration document.
    #[must_use]
    pub fn pointer(&self) -> String {
        match self {
            Self::Malformed(_) => String::new(),
            Self::InvalidLibraryName(_) => "/name".to_string(),
            Self::InvalidModuleName { index, .. } | Self::DuplicateModule { index, .. } => {
                format!("/modules/{index}/name")
            }
            Self::InvalidTestFramework(_) => "/test_framework".to_string(),
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
