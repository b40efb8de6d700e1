//! Per-artifact rendering: context assembly and template resolution.

mod artifact_renderer;
mod context;

pub use artifact_renderer::ArtifactRenderer;
pub use context::ArtifactContext;
