//! Parsing of configuration documents into a JSON value tree.

use cgen_domain::DocumentFormat;
use serde_json::Value;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON parsing failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its top level is not a mapping.
    #[error("top level must be a mapping, found {0}")]
    NotAMapping(&'static str),
}

/// Parses `text` as `format` into a JSON value tree.
///
/// YAML documents are converted on the fly, so downstream code sees one
/// representation regardless of the input syntax. The top level must be a
/// mapping.
///
/// # Errors
///
/// Returns an error if the text is malformed or the top level is not a
/// mapping.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value, SerializationError> {
    let value = match format {
        DocumentFormat::Json => from_json(text)?,
        DocumentFormat::Yaml => from_yaml(text)?,
    };

    if value.is_object() {
        Ok(value)
    } else {
        Err(SerializationError::NotAMapping(kind_of(&value)))
    }
}

/// Deserializes JSON from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid.
pub fn from_json(text: &str) -> Result<Value, SerializationError> {
    Ok(serde_json::from_str(text)?)
}

/// Deserializes YAML from a string into a JSON value tree.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or uses non-string keys.
pub fn from_yaml(text: &str) -> Result<Value, SerializationError> {
    Ok(serde_yaml::from_str(text)?)
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
