//! Artifact kinds and the template identifier scheme.
//!
//! Template ids are the contract with template collections:
//!
//! | artifact      | template id                              |
//! |---------------|------------------------------------------|
//! | header        | `{language}/header`                      |
//! | source        | `{language}/source`                      |
//! | test          | `tests/{test_framework}/{language}_test` |
//! | cmake         | `cmake/CMakeLists`                       |
//! | make          | `make/Makefile`                          |
//! | documentation | `docs/README`                            |

use serde::Serialize;

use crate::library::{BuildSystem, Language, TestFramework};

/// Kind of file produced by a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Public module header.
    Header,
    /// Module translation unit.
    Source,
    /// Module unit test.
    Test,
    /// Build-system project file.
    Build(BuildSystem),
    /// Library `README.md`.
    Documentation,
}

impl ArtifactKind {
    /// Resolves the template id for this artifact.
    ///
    /// Pure and total; an id that names no template surfaces later, when the
    /// template is loaded.
    #[must_use]
    pub fn template_id(&self, language: Language, test_framework: &TestFramework) -> TemplateId {
        match self {
            Self::Header => TemplateId::new(format!("{language}/header")),
            Self::Source => TemplateId::new(format!("{language}/source")),
            Self::Test => TemplateId::new(format!("tests/{test_framework}/{language}_test")),
            Self::Build(BuildSystem::Cmake) => TemplateId::new("cmake/CMakeLists"),
            Self::Build(BuildSystem::Make) => TemplateId::new("make/Makefile"),
            Self::Documentation => TemplateId::new("docs/README"),
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Source => "source",
            Self::Test => "test",
            Self::Build(BuildSystem::Cmake) => "cmake",
            Self::Build(BuildSystem::Make) => "make",
            Self::Documentation => "docs",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of a template within a template collection, e.g. `c/header`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Wraps an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
