//! Reporter adapter that forwards generation events to `tracing`.

use cgen_application::ports::{GenerationEvent, Reporter};
use tracing::{debug, info, warn};

/// Logs every generation event with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
    /// Creates a new tracing reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn report(&self, event: &GenerationEvent<'_>) {
        match *event {
            GenerationEvent::Started { library, modules } => {
                info!(library, modules, "generating library");
            }
            GenerationEvent::SchemaChecked { schema } => {
                debug!(schema, "configuration matches schema");
            }
            GenerationEvent::SchemaSkipped { schema, reason } => {
                warn!(schema, reason, "schema validation skipped");
            }
            GenerationEvent::ArtifactWritten { kind, path } => {
                info!(kind = kind.label(), path = %path.display(), "generated");
            }
            GenerationEvent::Completed { root, artifacts } => {
                info!(root = %root.display(), artifacts, "library generated");
            }
        }
    }
}
