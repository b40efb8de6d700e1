//! Application error types

use std::path::PathBuf;

use cgen_domain::{DocumentFormat, DomainError, TemplateId};
use thiserror::Error;

use crate::ports::{ConfigLoadError, FileSystemError, SchemaViolation, TemplateError};

/// Errors that abort a generation run.
///
/// None of them is retried; fixing the configuration or template and running
/// again regenerates everything.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The configuration path does not exist.
    #[error("configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration document is not well-formed.
    #[error("failed to parse {format} configuration {}: {message}", .path.display())]
    Parse {
        /// Document path.
        path: PathBuf,
        /// Syntax the document was parsed as.
        format: DocumentFormat,
        /// Parser message.
        message: String,
    },

    /// The configuration violates the schema or a structural rule.
    #[error("configuration validation failed at {pointer}: {message}")]
    Validation {
        /// JSON pointer to the violating value, `(root)` for the document.
        pointer: String,
        /// What is wrong with it.
        message: String,
    },

    /// A template is missing or failed to render.
    #[error("template rendering failed for {template}: {source}")]
    TemplateRender {
        /// Template that failed.
        template: TemplateId,
        /// Underlying cause.
        #[source]
        source: TemplateError,
    },

    /// Anything else, such as an output file that cannot be written.
    #[error("unexpected error: {message}")]
    Unexpected {
        /// Description of the failed operation.
        message: String,
        /// Underlying I/O failure, if any.
        #[source]
        source: Option<FileSystemError>,
    },
}

impl GeneratorError {
    /// Builds a validation error, naming the document root `(root)`.
    #[must_use]
    pub fn validation(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        let pointer = pointer.into();
        Self::Validation {
            pointer: if pointer.is_empty() {
                "(root)".to_string()
            } else {
                pointer
            },
            message: message.into(),
        }
    }
}

impl From<DomainError> for GeneratorError {
    fn from(err: DomainError) -> Self {
        Self::validation(err.pointer(), err.to_string())
    }
}

impl From<SchemaViolation> for GeneratorError {
    fn from(violation: SchemaViolation) -> Self {
        Self::validation(violation.pointer, violation.message)
    }
}

impl From<ConfigLoadError> for GeneratorError {
    fn from(err: ConfigLoadError) -> Self {
        match err {
            ConfigLoadError::NotFound(path) => Self::ConfigNotFound(path),
            ConfigLoadError::Parse {
                path,
                format,
                message,
            } => Self::Parse {
                path,
                format,
                message,
            },
            ConfigLoadError::Read { path, source } => Self::Unexpected {
                message: format!("failed to read {}", path.display()),
                source: Some(source),
            },
        }
    }
}

/// Result type alias for generation operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_root_pointer_is_named() {
        let err = GeneratorError::validation("", "missing field `name`");
        assert_eq!(
            err.to_string(),
            "configuration validation failed at (root): missing field `name`"
        );
    }

    #[test]
    fn test_domain_error_keeps_pointer() {
        let err: GeneratorError = DomainError::InvalidLibraryName("a b".to_string()).into();
        assert!(matches!(err, GeneratorError::Validation { ref pointer, .. } if pointer == "/name"));
    }

    #[test]
    fn test_template_error_keeps_cause() {
        let err = GeneratorError::TemplateRender {
            template: TemplateId::new("c/header"),
            source: TemplateError::NotFound(TemplateId::new("c/header")),
        };

        assert!(err.to_string().contains("c/header"));
        let cause = err.source().expect("cause should be preserved");
        assert!(cause.to_string().contains("not found"));
    }

    #[test]
    fn test_load_errors_map_onto_taxonomy() {
        let err: GeneratorError = ConfigLoadError::NotFound(PathBuf::from("missing.json")).into();
        assert!(matches!(err, GeneratorError::ConfigNotFound(_)));

        let err: GeneratorError = ConfigLoadError::Parse {
            path: PathBuf::from("bad.yaml"),
            format: DocumentFormat::Yaml,
            message: "unexpected end".to_string(),
        }
        .into();
        assert!(err.to_string().contains("YAML"));
    }
}
