//! Template source reading `{dir}/{id}.hbs` files.

use std::path::PathBuf;

use cgen_application::ports::{FileSystem, FileSystemError, TemplateError, TemplateSource};
use cgen_domain::TemplateId;

/// File extension of template files.
pub const TEMPLATE_EXTENSION: &str = "hbs";

/// Reads templates from a directory tree mirroring the template ids.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates<F: FileSystem> {
    fs: F,
    root: PathBuf,
}

impl<F: FileSystem> DirectoryTemplates<F> {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    /// Path of template `id` under the root.
    #[must_use]
    pub fn path_of(&self, id: &TemplateId) -> PathBuf {
        self.root.join(format!("{id}.{TEMPLATE_EXTENSION}"))
    }
}

impl<F: FileSystem> TemplateSource for DirectoryTemplates<F> {
    fn load(&self, id: &TemplateId) -> Result<String, TemplateError> {
        let path = self.path_of(id);
        if !self.fs.is_file(&path) {
            return Err(TemplateError::NotFound(id.clone()));
        }

        self.fs.read_file_string(&path).map_err(|source| match source {
            FileSystemError::NotFound(_) => TemplateError::NotFound(id.clone()),
            source => TemplateError::Read {
                template: id.clone(),
                source,
            },
        })
    }
}
