//! Output writer.

use std::path::Path;

use cgen_domain::{ArtifactKind, LibraryLayout};

use crate::error::{GeneratorError, GeneratorResult};
use crate::ports::{FileSystem, GenerationEvent, Reporter};

/// Writes rendered artifacts to disk.
///
/// Files are always overwritten; generation is not incremental.
pub struct OutputWriter<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> OutputWriter<F> {
    /// Creates a writer over the given file system.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Creates the directory skeleton of `layout`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Unexpected` if a directory cannot be created.
    pub fn create_layout(&self, layout: &LibraryLayout) -> GeneratorResult<()> {
        for dir in layout.directories() {
            self.create_dir(dir)?;
        }
        Ok(())
    }

    /// Creates missing parent directories of `path`, writes `contents` and
    /// reports the written path.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Unexpected` if a directory or the file cannot
    /// be written.
    pub fn write(
        &self,
        kind: ArtifactKind,
        path: &Path,
        contents: &str,
        reporter: &dyn Reporter,
    ) -> GeneratorResult<()> {
        if let Some(parent) = path.parent() {
            self.create_dir(parent)?;
        }

        self.fs
            .write_file(path, contents.as_bytes())
            .map_err(|source| GeneratorError::Unexpected {
                message: format!("failed to write {}", path.display()),
                source: Some(source),
            })?;

        reporter.report(&GenerationEvent::ArtifactWritten { kind, path });
        Ok(())
    }

    fn create_dir(&self, dir: &Path) -> GeneratorResult<()> {
        self.fs
            .create_dir_all(dir)
            .map_err(|source| GeneratorError::Unexpected {
                message: format!("failed to create directory {}", dir.display()),
                source: Some(source),
            })
    }
}
