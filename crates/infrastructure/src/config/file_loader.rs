//! Configuration loader backed by the file system.

use std::path::Path;

use cgen_application::ports::{Clock, ConfigLoadError, ConfigLoader, FileSystem, FileSystemError};
use cgen_domain::{ConfigDocument, DocumentFormat, GenerationMetadata};

use crate::serialization::parse_document;

/// Reads JSON or YAML configuration files and stamps generation metadata.
///
/// The format follows the extension: `.yaml` and `.yml` (any case) are YAML,
/// everything else is JSON.
#[derive(Debug, Clone)]
pub struct FileConfigLoader<F: FileSystem, C: Clock> {
    fs: F,
    clock: C,
}

impl<F: FileSystem, C: Clock> FileConfigLoader<F, C> {
    /// Creates a loader reading through `fs` and timestamping with `clock`.
    #[must_use]
    pub const fn new(fs: F, clock: C) -> Self {
        Self { fs, clock }
    }
}

impl<F: FileSystem, C: Clock> ConfigLoader for FileConfigLoader<F, C> {
    fn load(&self, path: &Path) -> Result<ConfigDocument, ConfigLoadError> {
        if !self.fs.exists(path) {
            return Err(ConfigLoadError::NotFound(path.to_path_buf()));
        }

        let format = DocumentFormat::from_path(path);
        let text = self.fs.read_file_string(path).map_err(|source| match source {
            FileSystemError::NotFound(path) => ConfigLoadError::NotFound(path),
            source => ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let value = parse_document(&text, format).map_err(|e| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            format,
            message: e.to_string(),
        })?;

        let mut document = ConfigDocument::new(path, format, value);
        document.stamp(&GenerationMetadata::at(self.clock.now()));

        tracing::debug!(path = %path.display(), %format, "loaded configuration");
        Ok(document)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::{FixedClock, StdFileSystem};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    fn loader() -> FileConfigLoader<StdFileSystem, FixedClock> {
        let instant = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        FileConfigLoader::new(StdFileSystem::new(), FixedClock::new(instant))
    }

    #[test]
    fn test_json_is_loaded_and_stamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lib.json");
        std::fs::write(&path, r#"{"name": "testlib", "generator_version": "0.0.1"}"#).unwrap();

        let document = loader().load(&path).unwrap();

        assert_eq!(document.format(), DocumentFormat::Json);
        assert_eq!(
            document.value(),
            &json!({
                "name": "testlib",
                "generated_at": "2025-03-14T15:09:26Z",
                "generator_version": "1.0.0"
            })
        );
    }

    #[test]
    fn test_yml_extension_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lib.YML");
        std::fs::write(&path, "name: testlib\nlanguage: cpp\n").unwrap();

        let document = loader().load(&path).unwrap();

        assert_eq!(document.format(), DocumentFormat::Yaml);
        assert_eq!(document.value()["language"], "cpp");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = loader().load(&path).unwrap_err();
        assert!(matches!(err, ConfigLoadError::NotFound(p) if p == path));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lib.yaml");
        std::fs::write(&path, "name: [testlib\n").unwrap();

        let err = loader().load(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Parse { format: DocumentFormat::Yaml, .. }
        ));
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lib.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = loader().load(&path).unwrap_err();
        match err {
            ConfigLoadError::Parse { message, .. } => assert!(message.contains("mapping")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
