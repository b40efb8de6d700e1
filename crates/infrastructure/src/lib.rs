//! cgen Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: blocking file access, JSON/YAML
//! configuration loading, JSON Schema validation, Handlebars rendering
//! and `tracing` event reporting.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod schema;
pub mod serialization;
pub mod templates;

pub use adapters::{FixedClock, SystemClock, TracingReporter};
pub use config::FileConfigLoader;
pub use persistence::StdFileSystem;
pub use schema::JsonSchemaValidator;
pub use serialization::{SerializationError, from_json, from_yaml, parse_document};
pub use templates::{
    DirectoryTemplates, EmbeddedTemplates, HandlebarsRenderer, TemplateCatalog,
};
