//! Configuration loading.

mod file_loader;

pub use file_loader::FileConfigLoader;
