//! Validate configuration use case.

use cgen_domain::{ConfigDocument, LibraryConfig};

use crate::error::GeneratorResult;
use crate::ports::{SchemaOutcome, SchemaValidator};

/// Schema checked when the caller does not name one.
pub const DEFAULT_SCHEMA: &str = "library";

/// A configuration that passed every structural check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    /// The typed library description.
    pub config: LibraryConfig,
    /// Whether the schema check ran or was skipped.
    pub schema: SchemaOutcome,
}

/// Use case for turning a loaded document into a trusted `LibraryConfig`.
///
/// Three gates, in order: the named JSON schema (skipped when absent), typed
/// decoding with defaults, and the domain invariants. Only the first gate
/// can be skipped.
pub struct ValidateConfig<V: SchemaValidator> {
    validator: V,
}

impl<V: SchemaValidator> ValidateConfig<V> {
    /// Creates a new `ValidateConfig` use case.
    #[must_use]
    pub const fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Validates `document` against `schema_name` and decodes it.
    ///
    /// # Errors
    /// - `GeneratorError::Validation` if the schema rejects the document
    /// - `GeneratorError::Validation` if the document has the wrong shape
    /// - `GeneratorError::Validation` if a domain invariant is violated
    pub fn execute(
        &self,
        document: &ConfigDocument,
        schema_name: &str,
    ) -> GeneratorResult<ValidatedConfig> {
        let schema = self.validator.check(document, schema_name)?;
        let config = LibraryConfig::from_document(document)?;
        config.validate()?;

        Ok(ValidatedConfig { config, schema })
    }
}
