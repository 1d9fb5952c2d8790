//! check command - Reload artifacts and verify correspondences

use crate::engine::{self, CheckOptions, Context};
use crate::ui::output;
use anyhow::Result;

/// Verify both artifacts, failing on the first inconsistency.
pub fn check(ctx: &Context, options: &CheckOptions) -> Result<()> {
    let report = engine::check(ctx, options)?;

    output::print(
        format!(
            "Correspondence OK: {} source verses, {} translation verses, {} links",
            report.source_verses, report.translation_verses, report.links
        ),
        ctx.verbosity(),
    );

    Ok(())
}
