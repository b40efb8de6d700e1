//! cgen Application - Use cases and ports
//!
//! This crate orchestrates a generation run: validating the configuration,
//! rendering each artifact and writing it into the library layout.
//! Everything that touches the outside world goes through a port.

pub mod error;
pub mod ports;
pub mod render;
pub mod use_cases;

#[cfg(test)]
mod fakes;

pub use error::{GeneratorError, GeneratorResult};
pub use render::{ArtifactContext, ArtifactRenderer};
pub use use_cases::{
    DEFAULT_SCHEMA, GenerateLibrary, GenerateLibraryInput, GenerateLibraryOutput,
    GeneratedArtifact, OutputWriter, ValidateConfig, ValidatedConfig,
};
