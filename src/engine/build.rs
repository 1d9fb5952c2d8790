//! engine::build
//!
//! The build pipeline: read both collections, align them, write artifacts.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::core::align::align;
use crate::core::artifact::{self, store, IdPrefixes};
use crate::core::loader::{load_books, LoadError};
use crate::core::paths::CollectionPaths;
use crate::core::verse::{ParallelText, Verse};
use crate::ui::output::{self, Verbosity};

/// CLI overrides for the configured locations.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub source_dir: Option<PathBuf>,
    pub translation_dir: Option<PathBuf>,
    pub source_out: Option<PathBuf>,
    pub translation_out: Option<PathBuf>,
}

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub source_verses: usize,
    pub translation_verses: usize,
    pub links: usize,
    pub source_output: PathBuf,
    pub translation_output: PathBuf,
}

/// Load both collections and align them.
pub fn build_parallel_text(
    source_dir: &Path,
    translation_dir: &Path,
    extension: &str,
    verbosity: Verbosity,
) -> Result<ParallelText, LoadError> {
    let source = load_side(source_dir, extension, verbosity)?;
    let translation = load_side(translation_dir, extension, verbosity)?;

    let mut text = ParallelText::new(source, translation);
    let links = align(&mut text);
    output::debug(format!("Aligned {} verse pairs", links), verbosity);
    Ok(text)
}

fn load_side(dir: &Path, extension: &str, verbosity: Verbosity) -> Result<Vec<Verse>, LoadError> {
    let books = load_books(dir, extension)?;
    for book in &books {
        output::debug(
            format!(
                "{}: book {} -> {} verses",
                book.path.display(),
                book.book,
                book.verses.len()
            ),
            verbosity,
        );
    }
    let verses: Vec<Verse> = books.into_iter().flat_map(|b| b.verses).collect();
    output::debug(
        format!("{}: {} verses total", dir.display(), verses.len()),
        verbosity,
    );
    Ok(verses)
}

/// Run the build pipeline for the project in `ctx`.
pub fn build(ctx: &Context, options: &BuildOptions) -> Result<BuildReport> {
    let verbosity = ctx.verbosity();
    let project = ctx.project_paths()?;
    let config = ctx.load_config(&project)?;

    let mut paths = CollectionPaths::from_config(&project, &config);
    if let Some(dir) = &options.source_dir {
        paths.source_dir = project.resolve(dir);
    }
    if let Some(dir) = &options.translation_dir {
        paths.translation_dir = project.resolve(dir);
    }
    if let Some(out) = &options.source_out {
        paths.source_output = project.resolve(out);
    }
    if let Some(out) = &options.translation_out {
        paths.translation_output = project.resolve(out);
    }
    if paths.source_output == paths.translation_output {
        bail!(
            "Source and translation artifacts would both be written to '{}'",
            paths.source_output.display()
        );
    }

    let text = build_parallel_text(
        &paths.source_dir,
        &paths.translation_dir,
        config.markup_extension(),
        verbosity,
    )
    .context("Failed to build verse collections")?;

    save(&text, &config.id_prefixes(), &paths)?;

    Ok(BuildReport {
        source_verses: text.source.len(),
        translation_verses: text.translation.len(),
        links: text.link_count(),
        source_output: paths.source_output,
        translation_output: paths.translation_output,
    })
}

/// Encode `text` and write both artifacts.
pub fn save(text: &ParallelText, prefixes: &IdPrefixes, paths: &CollectionPaths) -> Result<()> {
    let encoded = artifact::encode(text, prefixes);
    store::write_pair(
        &paths.source_output,
        &encoded.source,
        &paths.translation_output,
        &encoded.translation,
    )
    .context("Failed to write verse artifacts")
}
