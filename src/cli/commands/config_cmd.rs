//! config command - Print the effective configuration

use crate::engine::Context;
use anyhow::{Context as _, Result};

/// Print the merged configuration as TOML.
///
/// The files it was loaded from are listed as comments first.
pub fn config(ctx: &Context) -> Result<()> {
    let paths = ctx.project_paths()?;
    let config = ctx.load_config(&paths)?;

    if let Some(path) = config.global_config_loaded_from() {
        println!("# global: {}", path.display());
    }
    if let Some(path) = config.project_config_loaded_from() {
        println!("# project: {}", path.display());
    }

    let text =
        toml::to_string_pretty(&config.effective()).context("Failed to render configuration")?;
    print!("{}", text);

    Ok(())
}
