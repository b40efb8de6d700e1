//! cgen - command surface
//!
//! Wires the infrastructure adapters into the `GenerateLibrary` use case.
//! The binary parses a [`Cli`] and calls [`generate`]; tests call
//! [`generate_with_clock`] to pin the timestamp.

use std::path::PathBuf;

use cgen_application::ports::{Clock, ConfigLoader};
use cgen_application::{GenerateLibrary, GenerateLibraryInput, GenerateLibraryOutput, GeneratorResult};
use cgen_infrastructure::{
    DirectoryTemplates, FileConfigLoader, HandlebarsRenderer, JsonSchemaValidator, StdFileSystem,
    SystemClock, TemplateCatalog, TracingReporter,
};
use clap::Parser;

/// Generate robust, portable C/C++ libraries from a JSON or YAML description.
#[derive(Debug, Clone, Parser)]
#[command(name = "cgen", version)]
pub struct Cli {
    /// Configuration file (JSON or YAML)
    #[arg(short = 'c', long)]
    pub config: PathBuf,

    /// Output directory; the library is written to `{output}/{name}`
    #[arg(short = 'o', long, default_value = "generated")]
    pub output: PathBuf,

    /// Directory of template overrides, laid out as `{id}.hbs`
    #[arg(short = 't', long)]
    pub templates: Option<PathBuf>,

    /// Directory holding `library.json`; validation is skipped if it is missing
    #[arg(long, default_value = "schemas")]
    pub schemas: PathBuf,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Runs one generation with the system clock.
///
/// # Errors
///
/// Returns the first error of the run; see [`cgen_application::GeneratorError`].
pub fn generate(cli: &Cli) -> GeneratorResult<GenerateLibraryOutput> {
    generate_with_clock(cli, SystemClock::new())
}

/// Runs one generation, stamping the configuration with `clock`.
///
/// # Errors
///
/// Returns the first error of the run; see [`cgen_application::GeneratorError`].
pub fn generate_with_clock<C: Clock>(cli: &Cli, clock: C) -> GeneratorResult<GenerateLibraryOutput> {
    let fs = StdFileSystem::new();

    let document = FileConfigLoader::new(fs, clock).load(&cli.config)?;

    let templates = cli.templates.as_ref().map_or_else(TemplateCatalog::builtin, |dir| {
        TemplateCatalog::with_overrides(DirectoryTemplates::new(fs, dir))
    });

    let use_case = GenerateLibrary::new(
        fs,
        HandlebarsRenderer::new(templates),
        JsonSchemaValidator::new(fs, &cli.schemas),
        TracingReporter::new(),
    );

    use_case.execute(GenerateLibraryInput::new(document, &cli.output))
}
