//! Configuration loader port.

use std::path::{Path, PathBuf};

use cgen_domain::{ConfigDocument, DocumentFormat};

use super::FileSystemError;

/// Errors raised while reading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// The path does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document is malformed or its top level is not a mapping.
    #[error("invalid {format} in {}: {message}", .path.display())]
    Parse {
        /// Document path.
        path: PathBuf,
        /// Syntax the document was parsed as.
        format: DocumentFormat,
        /// Parser message.
        message: String,
    },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Document path.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: FileSystemError,
    },
}

/// Port for turning a configuration path into a stamped document.
pub trait ConfigLoader {
    /// Reads and parses the document at `path`, stamping generation metadata.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::NotFound` for a missing path and
    /// `ConfigLoadError::Parse` for a malformed document.
    fn load(&self, path: &Path) -> Result<ConfigDocument, ConfigLoadError>;
}
