//! Layered template lookup: an optional override directory over the
//! built-in collection.

use cgen_application::ports::{FileSystem, TemplateError, TemplateSource};
use cgen_domain::TemplateId;

use super::{DirectoryTemplates, EmbeddedTemplates};

/// Looks a template up in the override directory first, then in the
/// built-in collection.
///
/// Only a missing override falls through; an override that exists but cannot
/// be read is an error.
#[derive(Debug, Clone)]
pub struct TemplateCatalog<F: FileSystem> {
    overrides: Option<DirectoryTemplates<F>>,
    builtin: EmbeddedTemplates,
}

impl<F: FileSystem> TemplateCatalog<F> {
    /// Catalog serving only the built-in templates.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            overrides: None,
            builtin: EmbeddedTemplates::new(),
        }
    }

    /// Catalog preferring templates found in `overrides`.
    #[must_use]
    pub const fn with_overrides(overrides: DirectoryTemplates<F>) -> Self {
        Self {
            overrides: Some(overrides),
            builtin: EmbeddedTemplates::new(),
        }
    }
}

impl<F: FileSystem> TemplateSource for TemplateCatalog<F> {
    fn load(&self, id: &TemplateId) -> Result<String, TemplateError> {
        if let Some(overrides) = &self.overrides {
            match overrides.load(id) {
                Err(TemplateError::NotFound(_)) => {}
                found => {
                    tracing::debug!(template = %id, path = %overrides.path_of(id).display(), "using template override");
                    return found;
                }
            }
        }
        self.builtin.load(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::StdFileSystem;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_override_wins() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/README.hbs"), "custom {{config.name}}").unwrap();

        let catalog =
            TemplateCatalog::with_overrides(DirectoryTemplates::new(StdFileSystem::new(), dir.path()));

        assert_eq!(
            catalog.load(&TemplateId::new("docs/README")).unwrap(),
            "custom {{config.name}}"
        );
    }

    #[test]
    fn test_missing_override_falls_back_to_builtin() {
        let dir = tempdir().unwrap();
        let catalog =
            TemplateCatalog::with_overrides(DirectoryTemplates::new(StdFileSystem::new(), dir.path()));

        let text = catalog.load(&TemplateId::new("c/header")).unwrap();
        assert!(text.contains("#ifndef {{include_guard}}"));
    }

    #[test]
    fn test_unknown_everywhere_is_not_found() {
        let catalog = TemplateCatalog::<StdFileSystem>::builtin();
        let err = catalog.load(&TemplateId::new("rust/header")).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
    }
}
