//! File system adapters.

mod std_file_system;

pub use std_file_system::StdFileSystem;
