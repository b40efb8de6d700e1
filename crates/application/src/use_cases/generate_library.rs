//! Generate library use case.

use std::path::PathBuf;

use cgen_domain::{ArtifactKind, ConfigDocument, LibraryConfig, LibraryLayout};

use super::{DEFAULT_SCHEMA, OutputWriter, ValidateConfig};
use crate::error::GeneratorResult;
use crate::ports::{
    FileSystem, GenerationEvent, Reporter, SchemaOutcome, SchemaValidator, TemplateRenderer,
};
use crate::render::ArtifactRenderer;

/// Input for generating a library.
#[derive(Debug, Clone)]
pub struct GenerateLibraryInput {
    /// The loaded, stamped configuration document.
    pub document: ConfigDocument,
    /// Directory under which `{name}/` is created.
    pub output_root: PathBuf,
    /// Schema to validate against.
    pub schema_name: String,
}

impl GenerateLibraryInput {
    /// Creates an input validated against the default `library` schema.
    #[must_use]
    pub fn new(document: ConfigDocument, output_root: impl Into<PathBuf>) -> Self {
        Self {
            document,
            output_root: output_root.into(),
            schema_name: DEFAULT_SCHEMA.to_string(),
        }
    }
}

/// One file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// What the file is.
    pub kind: ArtifactKind,
    /// Where it was written.
    pub path: PathBuf,
}

/// Output from generating a library.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateLibraryOutput {
    /// The validated library description.
    pub config: LibraryConfig,
    /// `{output_root}/{name}`
    pub library_root: PathBuf,
    /// Every written artifact, in write order.
    pub artifacts: Vec<GeneratedArtifact>,
    /// Whether the schema check ran or was skipped.
    pub schema: SchemaOutcome,
}

/// Use case for generating a complete library source tree.
///
/// Runs strictly in order: validate, then the directory skeleton, then per
/// module header/source/test, then build files, then documentation. The first failure aborts the run;
/// files already written are left in place.
pub struct GenerateLibrary<F, R, V, P>
where
    F: FileSystem,
    R: TemplateRenderer,
    V: SchemaValidator,
    P: Reporter,
{
    validate: ValidateConfig<V>,
    renderer: ArtifactRenderer<R>,
    writer: OutputWriter<F>,
    reporter: P,
}

impl<F, R, V, P> GenerateLibrary<F, R, V, P>
where
    F: FileSystem,
    R: TemplateRenderer,
    V: SchemaValidator,
    P: Reporter,
{
    /// Creates a new `GenerateLibrary` use case.
    #[must_use]
    pub const fn new(fs: F, renderer: R, validator: V, reporter: P) -> Self {
        Self {
            validate: ValidateConfig::new(validator),
            renderer: ArtifactRenderer::new(renderer),
            writer: OutputWriter::new(fs),
            reporter,
        }
    }

    /// Generates every artifact of the configured library.
    ///
    /// # Errors
    /// - `GeneratorError::Validation` if the configuration is rejected (nothing is written)
    /// - `GeneratorError::TemplateRender` if any template is missing or fails
    /// - `GeneratorError::Unexpected` if an output file cannot be written
    pub fn execute(&self, input: GenerateLibraryInput) -> GeneratorResult<GenerateLibraryOutput> {
        let validated = self.validate.execute(&input.document, &input.schema_name)?;
        let config = validated.config;

        self.reporter.report(&GenerationEvent::Started {
            library: &config.name,
            modules: config.modules.len(),
        });
        match &validated.schema {
            SchemaOutcome::Passed { schema } => {
                self.reporter
                    .report(&GenerationEvent::SchemaChecked { schema });
            }
            SchemaOutcome::Skipped { schema, reason } => {
                self.reporter
                    .report(&GenerationEvent::SchemaSkipped { schema, reason });
            }
        }

        let layout = LibraryLayout::new(&input.output_root, &config);
        self.writer.create_layout(&layout)?;
        let artifacts = self.emit(&config, &layout)?;

        self.reporter.report(&GenerationEvent::Completed {
            root: layout.root(),
            artifacts: artifacts.len(),
        });

        Ok(GenerateLibraryOutput {
            library_root: layout.root().to_path_buf(),
            artifacts,
            schema: validated.schema,
            config,
        })
    }

    fn emit(
        &self,
        config: &LibraryConfig,
        layout: &LibraryLayout,
    ) -> GeneratorResult<Vec<GeneratedArtifact>> {
        let mut written = Vec::new();

        for module in &config.modules {
            let header = self.renderer.header(config, module)?;
            self.write(ArtifactKind::Header, layout.header_path(module), &header, &mut written)?;

            let source = self.renderer.source(config, module)?;
            self.write(ArtifactKind::Source, layout.source_path(module), &source, &mut written)?;

            if config.generate_tests {
                let test = self.renderer.test(config, module)?;
                self.write(ArtifactKind::Test, layout.test_path(module), &test, &mut written)?;
            }
        }

        for &build_system in &config.build_systems {
            let build_file = self.renderer.build_file(config, build_system)?;
            self.write(
                ArtifactKind::Build(build_system),
                layout.build_file_path(build_system),
                &build_file,
                &mut written,
            )?;
        }

        if config.generate_docs {
            let readme = self.renderer.documentation(config)?;
            self.write(
                ArtifactKind::Documentation,
                layout.readme_path(),
                &readme,
                &mut written,
            )?;
        }

        Ok(written)
    }

    fn write(
        &self,
        kind: ArtifactKind,
        path: PathBuf,
        contents: &str,
        written: &mut Vec<GeneratedArtifact>,
    ) -> GeneratorResult<()> {
        self.writer.write(kind, &path, contents, &self.reporter)?;
        written.push(GeneratedArtifact { kind, path });
        Ok(())
    }
}
