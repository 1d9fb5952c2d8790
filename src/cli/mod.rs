//! cli
//!
//! Command-line front end.
//!
//! Parsing happens here; everything else is delegated. Commands receive an
//! [`engine::Context`] built from the global flags and never touch
//! documents or artifacts except through [`crate::engine`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use crate::core::config::GlobalConfigSource;
use crate::engine;
use anyhow::Result;

impl Cli {
    /// Execution context from the global flags.
    pub fn context(&self) -> engine::Context {
        engine::Context {
            cwd: self.cwd.clone(),
            debug: self.debug,
            quiet: self.quiet,
            global_config: GlobalConfigSource::Search,
        }
    }
}

/// Parse the process arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let ctx = cli.context();
    commands::dispatch(cli.command, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn context_carries_global_flags() {
        let cli = Cli::parse_from(["versealign", "--cwd", "/tmp/aeneid", "-q", "check"]);
        let ctx = cli.context();
        assert_eq!(ctx.cwd, Some(PathBuf::from("/tmp/aeneid")));
        assert!(ctx.quiet);
        assert!(!ctx.debug);
        assert_eq!(ctx.global_config, GlobalConfigSource::Search);
    }
}
