//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Use this directory as the project root
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// versealign - Segment parallel verse collections and align them by line range
#[derive(Parser, Debug)]
#[command(name = "versealign")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this directory as the project root
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build verse artifacts from both collections
    #[command(
        name = "build",
        long_about = "Build verse artifacts from the source and translation collections.\n\n\
            Every document in each collection directory is split into verses at its \
            card milestones. Verses of the two collections whose line ranges overlap \
            within the same book are linked, and each collection is written to its \
            own JSON artifact with cross-referencing ids.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Build with the configured (or default) locations
    versealign build

    # Build from other directories
    versealign build --source-dir texts/latin --translation-dir texts/dryden

    # See per-book verse counts
    versealign --debug build"
    )]
    Build {
        /// Directory of source-language documents
        #[arg(long, value_name = "DIR")]
        source_dir: Option<PathBuf>,

        /// Directory of translation documents
        #[arg(long, value_name = "DIR")]
        translation_dir: Option<PathBuf>,

        /// Output path of the source artifact
        #[arg(long, value_name = "FILE")]
        source_out: Option<PathBuf>,

        /// Output path of the translation artifact
        #[arg(long, value_name = "FILE")]
        translation_out: Option<PathBuf>,
    },

    /// Reload both artifacts and verify their correspondences
    #[command(
        name = "check",
        long_about = "Reload both verse artifacts and verify their correspondences.\n\n\
            The artifacts are parsed independently and their cross-references are \
            resolved by id. References to ids that do not exist are skipped. Every \
            remaining link must connect verses of the same book with overlapping \
            line ranges.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Check the configured artifacts
    versealign check

    # Check artifacts at other locations
    versealign check --source out/latin.json --translation out/english.json"
    )]
    Check {
        /// Path of the source artifact
        #[arg(long, value_name = "FILE")]
        source: Option<PathBuf>,

        /// Path of the translation artifact
        #[arg(long, value_name = "FILE")]
        translation: Option<PathBuf>,
    },

    /// Show a source verse and its translation
    #[command(
        name = "show",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show the verse containing line 34 of book 1
    versealign show 1 34

    # Machine-readable output
    versealign show 1 34 --json"
    )]
    Show {
        /// Book number
        book: u32,

        /// Line number within the book
        line: u32,

        /// Print the matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    #[command(name = "config")]
    Config,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    versealign completion bash > ~/.local/share/bash-completion/completions/versealign
    versealign completion zsh > ~/.zfunc/_versealign"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_overrides() {
        let cli = Cli::parse_from([
            "versealign",
            "--debug",
            "build",
            "--source-dir",
            "texts/latin",
            "--translation-out",
            "out/e.json",
        ]);
        assert!(cli.debug);
        match cli.command {
            Command::Build {
                source_dir,
                translation_dir,
                translation_out,
                ..
            } => {
                assert_eq!(source_dir, Some(PathBuf::from("texts/latin")));
                assert!(translation_dir.is_none());
                assert_eq!(translation_out, Some(PathBuf::from("out/e.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_show_with_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["versealign", "show", "2", "100", "--json", "-q"]);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Command::Show {
                book: 2,
                line: 100,
                json: true
            }
        ));
    }
}
