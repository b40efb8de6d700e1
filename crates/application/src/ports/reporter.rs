//! Reporter port for generation events.

use std::path::Path;

use cgen_domain::ArtifactKind;

/// Something worth telling the user about during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationEvent<'a> {
    /// Generation of a library began.
    Started {
        /// Library name.
        library: &'a str,
        /// Number of modules to generate.
        modules: usize,
    },
    /// The configuration passed its schema.
    SchemaChecked {
        /// Schema name.
        schema: &'a str,
    },
    /// No schema was found, so schema validation was skipped.
    SchemaSkipped {
        /// Schema name.
        schema: &'a str,
        /// Why the check did not run.
        reason: &'a str,
    },
    /// An artifact was written.
    ArtifactWritten {
        /// Artifact kind.
        kind: ArtifactKind,
        /// Path written.
        path: &'a Path,
    },
    /// Generation of a library finished.
    Completed {
        /// Library root directory.
        root: &'a Path,
        /// Number of artifacts written.
        artifacts: usize,
    },
}

/// Sink for generation events.
pub trait Reporter: Send + Sync {
    /// Records one event.
    fn report(&self, event: &GenerationEvent<'_>);
}
