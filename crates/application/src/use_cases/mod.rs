//! Application use cases (generation orchestration).

mod generate_library;
mod validate_config;
mod write_output;

pub use generate_library::*;
pub use validate_config::*;
pub use write_output::*;
