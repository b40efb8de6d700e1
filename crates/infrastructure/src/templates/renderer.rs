//! Handlebars implementation of the template renderer port.

use cgen_application::ArtifactContext;
use cgen_application::ports::{TemplateError, TemplateRenderer, TemplateSource};
use cgen_domain::TemplateId;
use handlebars::Handlebars;

use super::helpers::register_naming_helpers;

/// Renders templates fetched from a [`TemplateSource`] with Handlebars.
///
/// The registry runs in strict mode, so a template that reads a variable
/// the context does not provide fails instead of rendering an empty string.
/// Output is not HTML-escaped.
#[derive(Debug)]
pub struct HandlebarsRenderer<S: TemplateSource> {
    source: S,
    registry: Handlebars<'static>,
}

impl<S: TemplateSource> HandlebarsRenderer<S> {
    /// Creates a renderer over `source` with the naming helpers registered.
    #[must_use]
    pub fn new(source: S) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        register_naming_helpers(&mut registry);

        Self { source, registry }
    }
}

impl<S: TemplateSource> TemplateRenderer for HandlebarsRenderer<S> {
    fn render(
        &self,
        id: &TemplateId,
        context: &ArtifactContext<'_>,
    ) -> Result<String, TemplateError> {
        let template = self.source.load(id)?;
        tracing::trace!(template = %id, "rendering");

        self.registry
            .render_template(&template, context)
            .map_err(|e| TemplateError::Render(Box::new(e)))
    }
}
