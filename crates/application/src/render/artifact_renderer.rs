//! Renders individual artifacts of a library.

use cgen_domain::{ArtifactKind, BuildSystem, LibraryConfig, Module};

use super::ArtifactContext;
use crate::error::{GeneratorError, GeneratorResult};
use crate::ports::TemplateRenderer;

/// Resolves the template for an artifact, builds its context and renders it.
pub struct ArtifactRenderer<R: TemplateRenderer> {
    renderer: R,
}

impl<R: TemplateRenderer> ArtifactRenderer<R> {
    /// Creates an artifact renderer on top of a template renderer.
    #[must_use]
    pub const fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Renders the public header of `module`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::TemplateRender` if the template is missing or fails.
    pub fn header(&self, config: &LibraryConfig, module: &Module) -> GeneratorResult<String> {
        self.render(ArtifactKind::Header, &ArtifactContext::header(config, module))
    }

    /// Renders the translation unit of `module`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::TemplateRender` if the template is missing or fails.
    pub fn source(&self, config: &LibraryConfig, module: &Module) -> GeneratorResult<String> {
        self.render(ArtifactKind::Source, &ArtifactContext::source(config, module))
    }

    /// Renders the unit test of `module`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::TemplateRender` if the template is missing or fails.
    pub fn test(&self, config: &LibraryConfig, module: &Module) -> GeneratorResult<String> {
        self.render(ArtifactKind::Test, &ArtifactContext::test(config, module))
    }

    /// Renders the project file of `build_system`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::TemplateRender` if the template is missing or fails.
    pub fn build_file(
        &self,
        config: &LibraryConfig,
        build_system: BuildSystem,
    ) -> GeneratorResult<String> {
        self.render(
            ArtifactKind::Build(build_system),
            &ArtifactContext::library(config),
        )
    }

    /// Renders `README.md`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::TemplateRender` if the template is missing or fails.
    pub fn documentation(&self, config: &LibraryConfig) -> GeneratorResult<String> {
        self.render(
            ArtifactKind::Documentation,
            &ArtifactContext::library(config),
        )
    }

    fn render(&self, kind: ArtifactKind, context: &ArtifactContext<'_>) -> GeneratorResult<String> {
        let config = context.config();
        let template = kind.template_id(config.language, &config.test_framework);

        self.renderer
            .render(&template, context)
            .map_err(|source| GeneratorError::TemplateRender { template, source })
    }
}
