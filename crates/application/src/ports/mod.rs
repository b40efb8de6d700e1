//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the generation engine and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod config_loader;
mod file_system;
mod reporter;
mod schema_validator;
mod template;

pub use clock::Clock;
pub use config_loader::{ConfigLoadError, ConfigLoader};
pub use file_system::{FileSystem, FileSystemError};
pub use reporter::{GenerationEvent, Reporter};
pub use schema_validator::{SchemaOutcome, SchemaValidator, SchemaViolation};
pub use template::{TemplateError, TemplateRenderer, TemplateSource};
