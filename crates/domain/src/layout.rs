//! Output directory layout of a generated library.
//!
//! ```text
//! {output_root}/{name}/
//! ├── include/{name}/{module}.h
//! ├── src/{module}.{c|cpp}
//! ├── tests/test_{module}.{c|cpp}
//! ├── docs/
//! ├── CMakeLists.txt
//! ├── Makefile
//! └── README.md
//! ```

use std::path::{Path, PathBuf};

use crate::library::{BuildSystem, Language, LibraryConfig};
use crate::module::Module;

/// Paths of every artifact of one library, rooted at `{output_root}/{name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryLayout {
    root: PathBuf,
    include_dir: PathBuf,
    src_dir: PathBuf,
    tests_dir: PathBuf,
    docs_dir: PathBuf,
    language: Language,
}

impl LibraryLayout {
    /// Computes the layout of `config` under `output_root`.
    #[must_use]
    pub fn new(output_root: &Path, config: &LibraryConfig) -> Self {
        let root = output_root.join(&config.name);
        Self {
            include_dir: root.join("include").join(&config.name),
            src_dir: root.join("src"),
            tests_dir: root.join("tests"),
            docs_dir: root.join("docs"),
            root,
            language: config.language,
        }
    }

    /// Library root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding public headers.
    #[must_use]
    pub fn include_dir(&self) -> &Path {
        &self.include_dir
    }

    /// Directory holding translation units.
    #[must_use]
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    /// Directory holding unit tests.
    #[must_use]
    pub fn tests_dir(&self) -> &Path {
        &self.tests_dir
    }

    /// Directory reserved for extended documentation.
    #[must_use]
    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Every directory of the layout, created before any file is written.
    #[must_use]
    pub fn directories(&self) -> [&Path; 4] {
        [
            self.include_dir.as_path(),
            self.src_dir.as_path(),
            self.tests_dir.as_path(),
            self.docs_dir.as_path(),
        ]
    }

    /// `include/{lib}/{module}.h`
    #[must_use]
    pub fn header_path(&self, module: &Module) -> PathBuf {
        self.include_dir.join(module.header_file())
    }

    /// `src/{module}.{ext}`
    #[must_use]
    pub fn source_path(&self, module: &Module) -> PathBuf {
        self.src_dir
            .join(format!("{}.{}", module.name, self.language.source_extension()))
    }

    /// `tests/test_{module}.{ext}`
    #[must_use]
    pub fn test_path(&self, module: &Module) -> PathBuf {
        self.tests_dir.join(format!(
            "test_{}.{}",
            module.name,
            self.language.source_extension()
        ))
    }

    /// Build file at the library root.
    #[must_use]
    pub fn build_file_path(&self, build_system: BuildSystem) -> PathBuf {
        self.root.join(build_system.file_name())
    }

    /// `README.md` at the library root.
    #[must_use]
    pub fn readme_path(&self) -> PathBuf {
        self.root.join("README.md")
    }
}
