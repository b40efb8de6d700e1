//! The library description: top-level configuration of one generation run.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::document::ConfigDocument;
use crate::error::{DomainError, DomainResult};
use crate::module::Module;

/// Version string stamped into every loaded configuration.
pub const GENERATOR_VERSION: &str = "1.0.0";

/// Target language of the generated library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// ISO C.
    #[default]
    C,
    /// C++.
    Cpp,
}

impl Language {
    /// Identifier used in template ids (`c`, `cpp`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
        }
    }

    /// Extension of translation units and test files.
    #[must_use]
    pub const fn source_extension(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build system for which a project file is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    /// `CMakeLists.txt`
    Cmake,
    /// GNU `Makefile`
    Make,
}

impl BuildSystem {
    /// Name of the generated file at the library root.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Cmake => "CMakeLists.txt",
            Self::Make => "Makefile",
        }
    }

    /// Lowercase identifier as written in configuration documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cmake => "cmake",
            Self::Make => "make",
        }
    }
}

impl std::fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a test-template family (`unity`, `gtest`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestFramework(String);

impl TestFramework {
    /// Creates a framework identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier becomes a template path segment, so it must be a
    /// single non-empty segment.
    fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }
}

impl Default for TestFramework {
    fn default() -> Self {
        Self::new("unity")
    }
}

impl std::fmt::Display for TestFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values stamped by the loader; never user supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationMetadata {
    /// When the configuration was loaded.
    pub generated_at: DateTime<Utc>,
    /// Version of the generator that loaded it.
    pub generator_version: String,
}

impl GenerationMetadata {
    /// Metadata for a load happening at `now`.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            generated_at: now,
            generator_version: GENERATOR_VERSION.to_string(),
        }
    }

    /// ISO-8601 form of the timestamp, as written into documents.
    #[must_use]
    pub fn generated_at_iso(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Complete description of the library to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Library name; also the output directory and include prefix.
    pub name: String,
    /// Library version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Target language.
    #[serde(default)]
    pub language: Language,
    /// C++ namespace; ignored by C templates.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Author line for file headers.
    #[serde(default)]
    pub author: String,
    /// Modules, in generation order.
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Requested build systems.
    #[serde(default = "default_build_systems")]
    pub build_systems: BTreeSet<BuildSystem>,
    /// Test-template family.
    #[serde(default)]
    pub test_framework: TestFramework,
    /// Whether to emit one test file per module.
    #[serde(default = "default_true")]
    pub generate_tests: bool,
    /// Whether to emit `README.md`.
    #[serde(default = "default_true")]
    pub generate_docs: bool,
    /// Load timestamp (stamped by the loader).
    #[serde(default)]
    pub generated_at: String,
    /// Generator version (stamped by the loader).
    #[serde(default)]
    pub generator_version: String,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_build_systems() -> BTreeSet<BuildSystem> {
    BTreeSet::from([BuildSystem::Cmake])
}

const fn default_true() -> bool {
    true
}

impl LibraryConfig {
    /// Creates a configuration with defaults and no modules.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            language: Language::default(),
            namespace: None,
            description: String::new(),
            author: String::new(),
            modules: Vec::new(),
            build_systems: default_build_systems(),
            test_framework: TestFramework::default(),
            generate_tests: true,
            generate_docs: true,
            generated_at: String::new(),
            generator_version: String::new(),
        }
    }

    /// Decodes a loaded document into typed form.
    ///
    /// Defaults are filled in here; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Malformed` if the document does not match the
    /// expected shape.
    pub fn from_document(document: &ConfigDocument) -> DomainResult<Self> {
        Self::deserialize(document.value()).map_err(|e| DomainError::Malformed(e.to_string()))
    }

    /// Checks the invariants that typed decoding cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> DomainResult<()> {
        if !is_safe_library_name(&self.name) {
            return Err(DomainError::InvalidLibraryName(self.name.clone()));
        }

        if !self.test_framework.is_valid() {
            return Err(DomainError::InvalidTestFramework(
                self.test_framework.to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (index, module) in self.modules.iter().enumerate() {
            module.validate(index)?;
            if !seen.insert(module.name.as_str()) {
                return Err(DomainError::DuplicateModule {
                    index,
                    name: module.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Namespace for C++ templates, empty when unset.
    #[must_use]
    pub fn namespace_or_empty(&self) -> &str {
        self.namespace.as_deref().unwrap_or_default()
    }
}

fn is_safe_library_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::document::DocumentFormat;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn document(value: serde_json::Value) -> ConfigDocument {
        ConfigDocument::new("lib.json", DocumentFormat::Json, value)
    }

    #[test]
    fn test_defaults_are_filled() {
        let config = LibraryConfig::from_document(&document(json!({"name": "testlib"})))
            .expect("should decode");

        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.language, Language::C);
        assert_eq!(config.namespace, None);
        assert_eq!(config.build_systems, BTreeSet::from([BuildSystem::Cmake]));
        assert_eq!(config.test_framework.as_str(), "unity");
        assert!(config.generate_tests);
        assert!(config.generate_docs);
        assert!(config.modules.is_empty());
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let err = LibraryConfig::from_document(&document(json!({"language": "c"})))
            .expect_err("name is required");
        assert!(matches!(err, DomainError::Malformed(ref msg) if msg.contains("name")));
    }

    #[test]
    fn test_unsupported_language_is_malformed() {
        let result =
            LibraryConfig::from_document(&document(json!({"name": "x", "language": "rust"})));
        assert!(matches!(result, Err(DomainError::Malformed(_))));
    }

    #[test]
    fn test_build_systems_are_ordered_and_deduplicated() {
        let config = LibraryConfig::from_document(&document(
            json!({"name": "x", "build_systems": ["make", "cmake", "make"]}),
        ))
        .expect("should decode");

        let systems: Vec<_> = config.build_systems.iter().copied().collect();
        assert_eq!(systems, vec![BuildSystem::Cmake, BuildSystem::Make]);
    }

    #[test]
    fn test_unknown_build_system_is_malformed() {
        let result = LibraryConfig::from_document(&document(
            json!({"name": "x", "build_systems": ["bazel"]}),
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_library_name() {
        assert!(LibraryConfig::new("my-lib_2").validate().is_ok());
        assert_eq!(
            LibraryConfig::new("").validate(),
            Err(DomainError::InvalidLibraryName(String::new()))
        );
        assert!(LibraryConfig::new("../escape").validate().is_err());
        assert!(LibraryConfig::new("my lib").validate().is_err());
        assert!(LibraryConfig::new("-flag").validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_modules() {
        let mut config = LibraryConfig::new("lib");
        config.modules = vec![Module::new("core"), Module::new("io"), Module::new("core")];

        assert_eq!(
            config.validate(),
            Err(DomainError::DuplicateModule {
                index: 2,
                name: "core".to_string()
            })
        );
    }

    #[test]
    fn test_validate_test_framework() {
        let mut config = LibraryConfig::new("lib");
        config.test_framework = TestFramework::new("../unity");
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidTestFramework(_))
        ));
    }

    #[test]
    fn test_language_extensions() {
        assert_eq!(Language::C.source_extension(), "c");
        assert_eq!(Language::Cpp.source_extension(), "cpp");
        assert_eq!(Language::Cpp.to_string(), "cpp");
    }

    #[test]
    fn test_metadata_iso_timestamp() {
        let now = Utc
            .with_ymd_and_hms(2025, 6, 19, 12, 30, 0)
            .single()
            .expect("valid timestamp");
        let metadata = GenerationMetadata::at(now);

        assert_eq!(metadata.generated_at_iso(), "2025-06-19T12:30:00Z");
        assert_eq!(metadata.generator_version, GENERATOR_VERSION);
    }

    #[test]
    fn test_namespace_or_empty() {
        let mut config = LibraryConfig::new("lib");
        assert_eq!(config.namespace_or_empty(), "");
        config.namespace = Some("acme".to_string());
        assert_eq!(config.namespace_or_empty(), "acme");
    }
}
