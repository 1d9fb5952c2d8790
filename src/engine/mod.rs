//! engine
//!
//! Orchestrates the two pipelines: build and check.
//!
//! # Architecture
//!
//! ```text
//! build: documents -> tokenize -> segment -> align -> encode -> artifacts
//! check: artifacts -> decode -> verify
//! ```
//!
//! The engine resolves configuration and paths from a [`Context`], runs the
//! pure `core` steps, and does the file I/O. It reports progress at debug
//! verbosity and returns a report for the CLI to display.
//!
//! # Invariants
//!
//! - Output of `build` always passes `check`
//! - Failures propagate immediately; nothing is retried or skipped, except
//!   dangling identifiers on reload

pub mod build;
pub mod check;

pub use build::{build, build_parallel_text, BuildOptions, BuildReport};
pub use check::{check, load_parallel_text, CheckOptions, CheckReport};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, GlobalConfigSource};
use crate::core::paths::ProjectPaths;
use crate::ui::output::{self, Verbosity};

/// Execution context shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Project root override (`--cwd`).
    pub cwd: Option<PathBuf>,
    /// Debug output enabled.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
    /// Where the global config file is taken from.
    pub global_config: GlobalConfigSource,
}

impl Context {
    /// Output verbosity from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The project root: `--cwd` or the current directory.
    pub fn project_paths(&self) -> Result<ProjectPaths> {
        let root = match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        Ok(ProjectPaths::new(root))
    }

    /// Load configuration for the project, printing any warnings.
    pub fn load_config(&self, paths: &ProjectPaths) -> Result<Config> {
        let result = Config::load_from(Some(&paths.root), &self.global_config)
            .context("Failed to load config")?;
        for warning in &result.warnings {
            output::warn(
                format!("{} ({})", warning.message, warning.path.display()),
                self.verbosity(),
            );
        }
        if let Some(path) = result.config.global_config_loaded_from() {
            output::debug(format!("Global config: {}", path.display()), self.verbosity());
        }
        if let Some(path) = result.config.project_config_loaded_from() {
            output::debug(format!("Project config: {}", path.display()), self.verbosity());
        }
        Ok(result.config)
    }
}
