//! show command - Show a source verse next to its translation

use crate::core::artifact::{self, IdPrefixes};
use crate::core::paths::CollectionPaths;
use crate::core::types::Side;
use crate::core::verse::ParallelText;
use crate::engine::{load_parallel_text, Context};
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Print the source verse(s) of `book` containing `line`, each followed by
/// its corresponding translation verses.
pub fn show(ctx: &Context, book: u32, line: u32, json: bool) -> Result<()> {
    let project = ctx.project_paths()?;
    let config = ctx.load_config(&project)?;
    let paths = CollectionPaths::from_config(&project, &config);
    let (text, _) = load_parallel_text(&paths.source_output, &paths.translation_output)
        .context("Failed to load verse artifacts")?;

    let matches = text.find_source(book, line);
    if matches.is_empty() {
        bail!("No source verse contains book {} line {}", book, line);
    }

    if json {
        print_json(&text, &matches, &config.id_prefixes())
    } else {
        print_text(ctx, &text, &matches);
        Ok(())
    }
}

fn print_text(ctx: &Context, text: &ParallelText, matches: &[usize]) {
    let verbosity = ctx.verbosity();
    for (n, &index) in matches.iter().enumerate() {
        if n > 0 {
            output::print("", verbosity);
        }
        output::print(output::format_verse(&text.source[index]), verbosity);

        let mut any = false;
        for verse in text.corresponding(Side::Source, index) {
            output::print("", verbosity);
            output::print(output::format_verse(verse), verbosity);
            any = true;
        }
        if !any {
            output::print("\n(no corresponding translation)", verbosity);
        }
    }
}

fn print_json(text: &ParallelText, matches: &[usize], prefixes: &IdPrefixes) -> Result<()> {
    let encoded = artifact::encode(text, prefixes);
    let entries: Vec<_> = matches
        .iter()
        .map(|&index| {
            let translation: Vec<_> = text.source[index]
                .corresponding
                .iter()
                .filter_map(|&t| encoded.translation.get(t))
                .collect();
            serde_json::json!({
                "source": encoded.source[index],
                "translation": translation,
            })
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries).context("Failed to render JSON")?;
    println!("{}", json);
    Ok(())
}
