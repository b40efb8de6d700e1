//! Rendering contexts handed to templates.
//!
//! | artifact     | variables                                           |
//! |--------------|-----------------------------------------------------|
//! | header       | `config`, `module`, `include_guard`, `namespace`    |
//! | source       | `config`, `module`, `header_file`                   |
//! | test         | `config`, `module`, `test_framework`                |
//! | build / docs | `config`                                            |

use cgen_domain::naming;
use cgen_domain::{LibraryConfig, Module, TestFramework};
use serde::Serialize;

/// Variables available to one template.
///
/// Construction never fails; a context that does not fit its template shows
/// up as a render error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArtifactContext<'a> {
    /// Context of a module header.
    Header {
        /// Whole library description.
        config: &'a LibraryConfig,
        /// Module being generated.
        module: &'a Module,
        /// `{MODULE}_H_`
        include_guard: String,
        /// C++ namespace, empty when unset.
        namespace: &'a str,
    },
    /// Context of a module translation unit.
    Source {
        /// Whole library description.
        config: &'a LibraryConfig,
        /// Module being generated.
        module: &'a Module,
        /// `{module}.h`
        header_file: String,
    },
    /// Context of a module unit test.
    Test {
        /// Whole library description.
        config: &'a LibraryConfig,
        /// Module being generated.
        module: &'a Module,
        /// Test-template family.
        test_framework: &'a TestFramework,
    },
    /// Context of library-wide files (build files, README).
    Library {
        /// Whole library description.
        config: &'a LibraryConfig,
    },
}

impl<'a> ArtifactContext<'a> {
    /// Context for `include/{lib}/{module}.h`.
    #[must_use]
    pub fn header(config: &'a LibraryConfig, module: &'a Module) -> Self {
        Self::Header {
            config,
            module,
            include_guard: format!("{}_H_", naming::upper(&module.name)),
            namespace: config.namespace_or_empty(),
        }
    }

    /// Context for `src/{module}.{ext}`.
    #[must_use]
    pub fn source(config: &'a LibraryConfig, module: &'a Module) -> Self {
        Self::Source {
            config,
            module,
            header_file: module.header_file(),
        }
    }

    /// Context for `tests/test_{module}.{ext}`.
    #[must_use]
    pub const fn test(config: &'a LibraryConfig, module: &'a Module) -> Self {
        Self::Test {
            config,
            module,
            test_framework: &config.test_framework,
        }
    }

    /// Context for build files and documentation.
    #[must_use]
    pub const fn library(config: &'a LibraryConfig) -> Self {
        Self::Library { config }
    }

    /// The library description every context carries.
    #[must_use]
    pub const fn config(&self) -> &'a LibraryConfig {
        match self {
            Self::Header { config, .. }
            | Self::Source { config, .. }
            | Self::Test { config, .. }
            | Self::Library { config } => *config,
        }
    }
}
