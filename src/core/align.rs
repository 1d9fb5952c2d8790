//! core::align
//!
//! Cross-collection alignment by line-range overlap.
//!
//! Two verses correspond when they belong to the same book and share at
//! least one line number. Alignment is idempotent: links already present
//! are not duplicated, so running it twice is the same as running it once.
//!
//! # Example
//!
//! ```
//! use versealign::core::align::align;
//! use versealign::core::types::LineRange;
//! use versealign::core::verse::{ParallelText, Verse};
//!
//! let verse = |start, end| Verse::new(1, LineRange::new(start, end).unwrap(), vec![]);
//! let mut text = ParallelText::new(
//!     vec![verse(10, 20)],
//!     vec![verse(1, 9), verse(20, 30)],
//! );
//!
//! align(&mut text);
//! assert_eq!(text.source[0].corresponding, vec![1]);
//! assert_eq!(text.translation[1].corresponding, vec![0]);
//! assert!(text.translation[0].corresponding.is_empty());
//! ```

use std::collections::HashMap;

use super::verse::ParallelText;

/// Link every overlapping same-book pair of verses.
///
/// Returns the number of links newly added.
pub fn align(text: &mut ParallelText) -> usize {
    let mut translation_by_book: HashMap<u32, Vec<usize>> = HashMap::new();
    for (index, verse) in text.translation.iter().enumerate() {
        translation_by_book.entry(verse.book).or_default().push(index);
    }

    let mut pairs = Vec::new();
    for (source_index, source) in text.source.iter().enumerate() {
        let Some(candidates) = translation_by_book.get(&source.book) else {
            continue;
        };
        for &translation_index in candidates {
            let translation = &text.translation[translation_index];
            if source.lines.overlaps(&translation.lines)
                && !source.corresponding.contains(&translation_index)
            {
                pairs.push((source_index, translation_index));
            }
        }
    }

    for &(source_index, translation_index) in &pairs {
        text.link(source_index, translation_index);
    }
    pairs.len()
}
