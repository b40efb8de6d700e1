//! Schema validation port.

use cgen_domain::ConfigDocument;

/// Outcome of a schema check that did not find a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaOutcome {
    /// The document satisfies the schema.
    Passed {
        /// Schema name.
        schema: String,
    },
    /// No schema with that name exists; validation was skipped.
    Skipped {
        /// Schema name.
        schema: String,
        /// Why the check did not run.
        reason: String,
    },
}

impl SchemaOutcome {
    /// Name of the schema that was checked or skipped.
    #[must_use]
    pub fn schema(&self) -> &str {
        match self {
            Self::Passed { schema } | Self::Skipped { schema, .. } => schema,
        }
    }

    /// True if the check was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// A document that violates its schema (or a schema that cannot be used).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{pointer}: {message}")]
pub struct SchemaViolation {
    /// JSON pointer to the violating value.
    pub pointer: String,
    /// Violation message.
    pub message: String,
}

impl SchemaViolation {
    /// Creates a violation.
    #[must_use]
    pub fn new(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            message: message.into(),
        }
    }
}

/// Port for checking a configuration document against a named schema.
pub trait SchemaValidator {
    /// Checks `document` against the schema called `schema_name`.
    ///
    /// A missing schema is not an error: it yields `SchemaOutcome::Skipped`.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaViolation` when the schema exists and rejects the
    /// document, or when the schema itself is unusable.
    fn check(
        &self,
        document: &ConfigDocument,
        schema_name: &str,
    ) -> Result<SchemaOutcome, SchemaViolation>;
}
