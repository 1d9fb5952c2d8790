//! core::verse
//!
//! Verse records and the parallel verse graph.
//!
//! # Architecture
//!
//! Each collection is a dense `Vec<Verse>`. A verse's `corresponding` list
//! holds indices into the *other* collection's vector, so the two-way
//! relation is stored without reference cycles:
//!
//! ```text
//! source[i].corresponding contains j  <=>  translation[j].corresponding contains i
//! ```
//!
//! # Invariants
//!
//! - Every verse has at least one paragraph (possibly empty)
//! - `corresponding` never contains the same index twice
//! - Links are only created through [`ParallelText::link`], which keeps both
//!   sides in step

use super::types::{LineRange, Side};

/// A line-range-addressable unit of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Book number (the `n` attribute of the document's `div1`).
    pub book: u32,
    /// Lines covered by this verse.
    pub lines: LineRange,
    /// Paragraphs, each an ordered list of line texts.
    pub paragraphs: Vec<Vec<String>>,
    /// Indices of corresponding verses in the other collection.
    pub corresponding: Vec<usize>,
}

impl Verse {
    /// Create an unlinked verse.
    ///
    /// An empty `paragraphs` list is normalized to a single empty paragraph.
    pub fn new(book: u32, lines: LineRange, paragraphs: Vec<Vec<String>>) -> Self {
        let paragraphs = if paragraphs.is_empty() {
            vec![Vec::new()]
        } else {
            paragraphs
        };
        Self {
            book,
            lines,
            paragraphs,
            corresponding: Vec::new(),
        }
    }

    /// Check whether the verse captured no text at all.
    pub fn is_blank(&self) -> bool {
        self.paragraphs.iter().all(|p| p.is_empty())
    }

    /// Total number of text lines across all paragraphs.
    pub fn line_count(&self) -> usize {
        self.paragraphs.iter().map(Vec::len).sum()
    }

    /// Record a correspondence, ignoring duplicates.
    fn add_corresponding(&mut self, index: usize) {
        if !self.corresponding.contains(&index) {
            self.corresponding.push(index);
        }
    }
}

/// Both collections plus the correspondence links between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelText {
    /// Verses of the source-language collection.
    pub source: Vec<Verse>,
    /// Verses of the translation collection.
    pub translation: Vec<Verse>,
}

impl ParallelText {
    /// Pair two verse collections.
    pub fn new(source: Vec<Verse>, translation: Vec<Verse>) -> Self {
        Self {
            source,
            translation,
        }
    }

    /// Link `source[source_index]` and `translation[translation_index]`.
    ///
    /// Both directions are recorded, each at most once. Returns `false`
    /// without changing anything if either index is out of bounds.
    pub fn link(&mut self, source_index: usize, translation_index: usize) -> bool {
        if source_index >= self.source.len() || translation_index >= self.translation.len() {
            return false;
        }
        self.source[source_index].add_corresponding(translation_index);
        self.translation[translation_index].add_corresponding(source_index);
        true
    }

    /// Get the verses of one side.
    pub fn side(&self, side: Side) -> &[Verse] {
        match side {
            Side::Source => &self.source,
            Side::Translation => &self.translation,
        }
    }

    /// Resolve the corresponding verses of `side[index]`.
    pub fn corresponding(&self, side: Side, index: usize) -> impl Iterator<Item = &Verse> {
        let other = self.side(side.other());
        self.side(side)
            .get(index)
            .into_iter()
            .flat_map(|verse| verse.corresponding.iter())
            .filter_map(move |&i| other.get(i))
    }

    /// Indices of source verses from `book` whose range contains `line`.
    pub fn find_source(&self, book: u32, line: u32) -> Vec<usize> {
        self.source
            .iter()
            .enumerate()
            .filter(|(_, v)| v.book == book && v.lines.contains(line))
            .map(|(i, _)| i)
            .collect()
    }

    /// Total number of links (counted once per pair).
    pub fn link_count(&self) -> usize {
        self.source.iter().map(|v| v.corresponding.len()).sum()
    }
}
