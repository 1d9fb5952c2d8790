//! build command - Build verse artifacts from both collections

use crate::engine::{self, BuildOptions, Context};
use crate::ui::output;
use anyhow::Result;

/// Build and write both artifacts.
pub fn build(ctx: &Context, options: &BuildOptions) -> Result<()> {
    let report = engine::build(ctx, options)?;
    let verbosity = ctx.verbosity();

    output::print(
        format!(
            "Source verses: {} -> {}",
            report.source_verses,
            report.source_output.display()
        ),
        verbosity,
    );
    output::print(
        format!(
            "Translation verses: {} -> {}",
            report.translation_verses,
            report.translation_output.display()
        ),
        verbosity,
    );
    output::debug(format!("Correspondences: {}", report.links), verbosity);

    Ok(())
}
