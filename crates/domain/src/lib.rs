//! cgen Domain - Core types
//!
//! This crate defines the library description model, the artifact and
//! template-id scheme, the output layout and the naming transforms.
//! All types here are pure Rust with no I/O dependencies.

pub mod artifact;
pub mod document;
pub mod error;
pub mod layout;
pub mod library;
pub mod module;
pub mod naming;

pub use artifact::{ArtifactKind, TemplateId};
pub use document::{ConfigDocument, DocumentFormat};
pub use error::{DomainError, DomainResult};
pub use layout::LibraryLayout;
pub use library::{
    BuildSystem, GENERATOR_VERSION, GenerationMetadata, Language, LibraryConfig, TestFramework,
};
pub use module::{
    Constant, ConstantValue, Enum, EnumValue, Field, Function, Module, Parameter, Struct,
};
