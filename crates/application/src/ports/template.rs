//! Template ports.

use cgen_domain::TemplateId;

use super::FileSystemError;
use crate::render::ArtifactContext;

/// Errors raised while loading or rendering a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// No template with that id exists.
    #[error("template not found: {0}")]
    NotFound(TemplateId),

    /// The template exists but could not be read.
    #[error("failed to read template {template}: {source}")]
    Read {
        /// Template id.
        template: TemplateId,
        /// Underlying failure.
        #[source]
        source: FileSystemError,
    },

    /// The template engine rejected the template or the context.
    #[error("{0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Port for fetching template text by id.
pub trait TemplateSource: Send + Sync {
    /// Returns the text of template `id`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` if no such template exists.
    fn load(&self, id: &TemplateId) -> Result<String, TemplateError>;
}

/// Port for rendering a template against an artifact context.
pub trait TemplateRenderer: Send + Sync {
    /// Loads template `id` and renders it with `context`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing, references an undefined
    /// variable, or fails to render.
    fn render(&self, id: &TemplateId, context: &ArtifactContext<'_>)
    -> Result<String, TemplateError>;
}
