//! Built-in template collection, compiled into the binary.

use cgen_application::ports::{TemplateError, TemplateSource};
use cgen_domain::TemplateId;

/// Every built-in template, keyed by template id.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("c/header", include_str!("../../templates/c/header.hbs")),
    ("c/source", include_str!("../../templates/c/source.hbs")),
    ("cpp/header", include_str!("../../templates/cpp/header.hbs")),
    ("cpp/source", include_str!("../../templates/cpp/source.hbs")),
    (
        "tests/unity/c_test",
        include_str!("../../templates/tests/unity/c_test.hbs"),
    ),
    (
        "tests/unity/cpp_test",
        include_str!("../../templates/tests/unity/cpp_test.hbs"),
    ),
    (
        "tests/gtest/cpp_test",
        include_str!("../../templates/tests/gtest/cpp_test.hbs"),
    ),
    (
        "cmake/CMakeLists",
        include_str!("../../templates/cmake/CMakeLists.hbs"),
    ),
    ("make/Makefile", include_str!("../../templates/make/Makefile.hbs")),
    ("docs/README", include_str!("../../templates/docs/README.hbs")),
];

/// Template source serving [`BUILTIN_TEMPLATES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Creates the built-in source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Ids of every built-in template.
    pub fn ids() -> impl Iterator<Item = TemplateId> {
        BUILTIN_TEMPLATES.iter().map(|(id, _)| TemplateId::new(*id))
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, id: &TemplateId) -> Result<String, TemplateError> {
        BUILTIN_TEMPLATES
            .iter()
            .find(|(name, _)| *name == id.as_str())
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| TemplateError::NotFound(id.clone()))
    }
}
