//! core::paths
//!
//! Centralized path routing for project files.
//!
//! # Architecture
//!
//! Configuration and CLI flags name collection directories and artifact
//! files as plain strings. Relative values are resolved against the project
//! root (`--cwd`, or the current directory); absolute values are used
//! unchanged. No other module joins project-relative paths itself.
//!
//! # Example
//!
//! ```
//! use versealign::core::paths::ProjectPaths;
//! use std::path::PathBuf;
//!
//! let paths = ProjectPaths::new(PathBuf::from("/work/aeneid"));
//!
//! assert_eq!(
//!     paths.resolve("resources/latin"),
//!     PathBuf::from("/work/aeneid/resources/latin")
//! );
//! assert_eq!(paths.resolve("/data/out.json"), PathBuf::from("/data/out.json"));
//! ```

use std::path::{Path, PathBuf};

use super::config::Config;

/// Path routing relative to a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Directory relative paths are resolved against.
    pub root: PathBuf,
}

impl ProjectPaths {
    /// Create paths rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve a configured path against the root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Every file location one build or check touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPaths {
    pub source_dir: PathBuf,
    pub translation_dir: PathBuf,
    pub source_output: PathBuf,
    pub translation_output: PathBuf,
}

impl CollectionPaths {
    /// Resolve the configured locations.
    pub fn from_config(paths: &ProjectPaths, config: &Config) -> Self {
        Self {
            source_dir: paths.resolve(config.source_dir()),
            translation_dir: paths.resolve(config.translation_dir()),
            source_output: paths.resolve(config.source_output()),
            translation_output: paths.resolve(config.translation_output()),
        }
    }
}
