//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Converts command-specific arguments into engine options
//! 2. Calls the engine to run the pipeline
//! 3. Formats and displays output
//!
//! Handlers do NOT read documents or artifacts themselves.

mod build;
mod check;
mod completion;
mod config_cmd;
mod show;

// Re-export command functions for testing and direct invocation
pub use build::build;
pub use check::check;
pub use completion::completion;
pub use config_cmd::config;
pub use show::show;

use crate::cli::args::Command;
use crate::engine::{BuildOptions, CheckOptions, Context};
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Build {
            source_dir,
            translation_dir,
            source_out,
            translation_out,
        } => build::build(
            ctx,
            &BuildOptions {
                source_dir,
                translation_dir,
                source_out,
                translation_out,
            },
        ),
        Command::Check {
            source,
            translation,
        } => check::check(
            ctx,
            &CheckOptions {
                source,
                translation,
            },
        ),
        Command::Show { book, line, json } => show::show(ctx, book, line, json),
        Command::Config => config_cmd::config(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}
