//! engine::check
//!
//! The check pipeline: reload both artifacts and verify correspondences.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::artifact::{self, store, ArtifactError, DecodeReport};
use crate::core::paths::CollectionPaths;
use crate::core::verify::verify;
use crate::core::verse::ParallelText;
use crate::ui::output;

/// CLI overrides for the configured artifact locations.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub source: Option<PathBuf>,
    pub translation: Option<PathBuf>,
}

/// Summary of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub source_verses: usize,
    pub translation_verses: usize,
    pub links: usize,
    pub skipped_links: usize,
}

/// Read both artifacts and rebuild the linked text.
pub fn load_parallel_text(
    source: &Path,
    translation: &Path,
) -> Result<(ParallelText, DecodeReport), ArtifactError> {
    let source_records = store::read_records(source)?;
    let translation_records = store::read_records(translation)?;
    artifact::decode(&source_records, &translation_records)
}

/// Resolve the artifact paths for `ctx`, applying overrides.
pub fn artifact_paths(ctx: &Context, options: &CheckOptions) -> Result<(PathBuf, PathBuf)> {
    let project = ctx.project_paths()?;
    let config = ctx.load_config(&project)?;
    let paths = CollectionPaths::from_config(&project, &config);

    let source = options
        .source
        .as_ref()
        .map(|p| project.resolve(p))
        .unwrap_or(paths.source_output);
    let translation = options
        .translation
        .as_ref()
        .map(|p| project.resolve(p))
        .unwrap_or(paths.translation_output);
    Ok((source, translation))
}

/// Run the check pipeline for the project in `ctx`.
pub fn check(ctx: &Context, options: &CheckOptions) -> Result<CheckReport> {
    let verbosity = ctx.verbosity();
    let (source, translation) = artifact_paths(ctx, options)?;

    let (text, decoded) =
        load_parallel_text(&source, &translation).context("Failed to load verse artifacts")?;
    if decoded.skipped_links > 0 {
        output::debug(
            format!("Skipped {} unresolved verse ids", decoded.skipped_links),
            verbosity,
        );
    }

    verify(&text)?;

    Ok(CheckReport {
        source_verses: text.source.len(),
        translation_verses: text.translation.len(),
        links: text.link_count(),
        skipped_links: decoded.skipped_links,
    })
}
