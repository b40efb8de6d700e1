//! In-memory port implementations for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cgen_domain::{ConfigDocument, TemplateId};

use crate::ports::{
    FileSystem, FileSystemError, GenerationEvent, Reporter, SchemaOutcome, SchemaValidator,
    SchemaViolation, TemplateError, TemplateRenderer,
};
use crate::render::ArtifactContext;

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

/// File system kept in a shared map; clones see the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    state: Arc<Mutex<MemoryState>>,
    read_only: bool,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write and mkdir fails with `PermissionDenied`.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: &str) {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.into(), contents.as_bytes().to_vec());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    /// Paths of all files, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().files.keys().cloned().collect()
    }

    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.state.lock().unwrap().files.clone()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        let state = self.state.lock().unwrap();
        let bytes = state
            .files
            .get(path)
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes.clone()).map_err(|_| FileSystemError::InvalidUtf8(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        if self.read_only {
            return Err(FileSystemError::PermissionDenied(path.to_path_buf()));
        }
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        if self.read_only {
            return Err(FileSystemError::PermissionDenied(path.to_path_buf()));
        }
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }
}

/// Renders `{id}\n{context as compact JSON}` so tests can see both.
#[derive(Debug, Clone, Default)]
pub struct StubRenderer {
    missing: BTreeSet<String>,
}

impl StubRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats template `id` as absent.
    pub fn without(mut self, id: &str) -> Self {
        self.missing.insert(id.to_string());
        self
    }
}

impl TemplateRenderer for StubRenderer {
    fn render(
        &self,
        id: &TemplateId,
        context: &ArtifactContext<'_>,
    ) -> Result<String, TemplateError> {
        if self.missing.contains(id.as_str()) {
            return Err(TemplateError::NotFound(id.clone()));
        }
        let json =
            serde_json::to_string(context).map_err(|e| TemplateError::Render(Box::new(e)))?;
        Ok(format!("{id}\n{json}"))
    }
}

#[derive(Debug, Clone)]
enum StubVerdict {
    Pass,
    Skip,
    Fail { pointer: String, message: String },
}

/// Schema validator with a canned verdict.
#[derive(Debug, Clone)]
pub struct StubValidator {
    verdict: StubVerdict,
}

impl StubValidator {
    pub const fn passing() -> Self {
        Self {
            verdict: StubVerdict::Pass,
        }
    }

    pub const fn skipping() -> Self {
        Self {
            verdict: StubVerdict::Skip,
        }
    }

    pub fn failing(pointer: &str, message: &str) -> Self {
        Self {
            verdict: StubVerdict::Fail {
                pointer: pointer.to_string(),
                message: message.to_string(),
            },
        }
    }
}

impl SchemaValidator for StubValidator {
    fn check(
        &self,
        _document: &ConfigDocument,
        schema_name: &str,
    ) -> Result<SchemaOutcome, SchemaViolation> {
        match &self.verdict {
            StubVerdict::Pass => Ok(SchemaOutcome::Passed {
                schema: schema_name.to_string(),
            }),
            StubVerdict::Skip => Ok(SchemaOutcome::Skipped {
                schema: schema_name.to_string(),
                reason: "schema file not found".to_string(),
            }),
            StubVerdict::Fail { pointer, message } => {
                Err(SchemaViolation::new(pointer.clone(), message.clone()))
            }
        }
    }
}

/// Reporter that keeps one line per event.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &GenerationEvent<'_>) {
        let line = match event {
            GenerationEvent::Started { library, modules } => {
                format!("started {library} ({modules} modules)")
            }
            GenerationEvent::SchemaChecked { schema } => format!("schema passed {schema}"),
            GenerationEvent::SchemaSkipped { schema, reason } => {
                format!("schema skipped {schema}: {reason}")
            }
            GenerationEvent::ArtifactWritten { kind, path } => {
                format!("written {kind} {}", path.display())
            }
            GenerationEvent::Completed { root, artifacts } => {
                format!("completed {} ({artifacts} artifacts)", root.display())
            }
        };
        self.events.lock().unwrap().push(line);
    }
}
