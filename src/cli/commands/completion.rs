//! completion command - Generate shell completion scripts

use std::io::{self, Write};

use crate::cli::args::{Cli, Shell};
use anyhow::{Context as _, Result};
use clap::CommandFactory;
use clap_complete::{generate, shells};

/// Write the completion script for `shell` to stdout.
pub fn completion(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_script(shell, &mut stdout)?;
    stdout.flush().context("Failed to write completion script")
}

fn write_script(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, bin, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, bin, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, bin, out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, bin, out),
    }
    Ok(())
}
