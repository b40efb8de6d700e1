//! The loosely-typed configuration document, as read from disk.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::library::GenerationMetadata;

/// Syntax of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// `.json` and any unrecognised extension.
    Json,
    /// `.yaml` / `.yml`.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed configuration document before schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    source: PathBuf,
    format: DocumentFormat,
    value: Value,
}

impl ConfigDocument {
    /// Wraps a parsed value.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, format: DocumentFormat, value: Value) -> Self {
        Self {
            source: source.into(),
            format,
            value,
        }
    }

    /// Path the document was read from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Syntax the document was written in.
    #[must_use]
    pub const fn format(&self) -> DocumentFormat {
        self.format
    }

    /// The document tree.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Writes `generated_at` and `generator_version` into the top-level
    /// mapping, replacing whatever the author put there.
    ///
    /// Returns `false` (and leaves the document alone) when the top level
    /// is not a mapping.
    pub fn stamp(&mut self, metadata: &GenerationMetadata) -> bool {
        let Some(map) = self.value.as_object_mut() else {
            return false;
        };
        map.insert(
            "generated_at".to_string(),
            Value::String(metadata.generated_at_iso()),
        );
        map.insert(
            "generator_version".to_string(),
            Value::String(metadata.generator_version.clone()),
        );
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.conf")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("noext")), DocumentFormat::Json);
    }

    #[test]
    fn test_stamp_overwrites_user_values() {
        let now = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp");
        let mut doc = ConfigDocument::new(
            "lib.json",
            DocumentFormat::Json,
            json!({"name": "lib", "generator_version": "9.9.9"}),
        );

        assert!(doc.stamp(&GenerationMetadata::at(now)));
        assert_eq!(doc.value()["generated_at"], "2024-01-02T03:04:05Z");
        assert_eq!(doc.value()["generator_version"], "1.0.0");
        assert_eq!(doc.value()["name"], "lib");
    }

    #[test]
    fn test_stamp_rejects_non_mapping() {
        let now = Utc::now();
        let mut doc = ConfigDocument::new("lib.json", DocumentFormat::Json, json!([1, 2]));
        assert!(!doc.stamp(&GenerationMetadata::at(now)));
        assert_eq!(doc.value(), &json!([1, 2]));
    }
}
