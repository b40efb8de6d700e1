//! JSON Schema validation of configuration documents.

use std::path::PathBuf;

use cgen_application::ports::{
    FileSystem, FileSystemError, SchemaOutcome, SchemaValidator, SchemaViolation,
};
use cgen_domain::ConfigDocument;
use serde_json::Value;

/// Validates documents against `{schema_dir}/{name}.json`.
///
/// A missing schema file skips validation. A schema that is not valid JSON,
/// or not a usable JSON Schema, is reported as a violation at the document
/// root.
#[derive(Debug, Clone)]
pub struct JsonSchemaValidator<F: FileSystem> {
    fs: F,
    schema_dir: PathBuf,
}

impl<F: FileSystem> JsonSchemaValidator<F> {
    /// Creates a validator looking up schemas in `schema_dir`.
    #[must_use]
    pub fn new(fs: F, schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            schema_dir: schema_dir.into(),
        }
    }

    fn schema_path(&self, schema_name: &str) -> PathBuf {
        self.schema_dir.join(format!("{schema_name}.json"))
    }

    fn load_schema(&self, schema_name: &str) -> Result<Option<Value>, SchemaViolation> {
        let path = self.schema_path(schema_name);
        if !self.fs.is_file(&path) {
            return Ok(None);
        }

        let text = match self.fs.read_file_string(&path) {
            Ok(text) => text,
            Err(FileSystemError::NotFound(_)) => return Ok(None),
            Err(e) => {
                return Err(SchemaViolation::new(
                    "",
                    format!("cannot read schema {}: {e}", path.display()),
                ));
            }
        };

        serde_json::from_str(&text).map(Some).map_err(|e| {
            SchemaViolation::new(
                "",
                format!("schema {} is not valid JSON: {e}", path.display()),
            )
        })
    }
}

impl<F: FileSystem> SchemaValidator for JsonSchemaValidator<F> {
    fn check(
        &self,
        document: &ConfigDocument,
        schema_name: &str,
    ) -> Result<SchemaOutcome, SchemaViolation> {
        let Some(schema) = self.load_schema(schema_name)? else {
            return Ok(SchemaOutcome::Skipped {
                schema: schema_name.to_string(),
                reason: format!(
                    "schema file {} not found",
                    self.schema_path(schema_name).display()
                ),
            });
        };

        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| SchemaViolation::new("", format!("invalid schema {schema_name}: {e}")))?;

        let errors: Vec<(String, String)> = validator
            .iter_errors(document.value())
            .map(|e| (e.instance_path.to_string(), e.to_string()))
            .collect();

        let Some((pointer, first)) = errors.first() else {
            return Ok(SchemaOutcome::Passed {
                schema: schema_name.to_string(),
            });
        };

        let mut message = first.clone();
        for (path, other) in &errors[1..] {
            let path = if path.is_empty() { "(root)" } else { path };
            message.push_str(&format!("; {path}: {other}"));
        }

        Err(SchemaViolation::new(pointer.clone(), message))
    }
}
