//! Template sources and the Handlebars renderer.
//!
//! Template ids map to files as `{id}.hbs`, e.g. `tests/unity/c_test` is
//! `tests/unity/c_test.hbs`. The same ids name the built-in templates.

mod catalog;
mod directory;
mod embedded;
mod helpers;
mod renderer;

pub use catalog::TemplateCatalog;
pub use directory::{DirectoryTemplates, TEMPLATE_EXTENSION};
pub use embedded::{BUILTIN_TEMPLATES, EmbeddedTemplates};
pub use helpers::register_naming_helpers;
pub use renderer::HandlebarsRenderer;
