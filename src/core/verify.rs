//! core::verify
//!
//! Correspondence verification for a linked [`ParallelText`].
//!
//! # Checks
//!
//! For every link, in source order then translation order:
//! - the index resolves to a verse on the other side
//! - the link is recorded on both sides
//! - both verses belong to the same book
//! - their line ranges overlap
//! - the legacy nesting predicate accepts the pair
//!
//! # Invariants
//!
//! - Never mutates the text
//! - Must be deterministic
//! - Accepts everything [`crate::core::align::align`] produces

use thiserror::Error;

use super::types::{LineRange, Side};
use super::verse::{ParallelText, Verse};

/// Why a pair of linked verses is inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// The link points past the end of the other collection.
    Dangling,
    /// Only one side records the link.
    OneSided,
    /// The verses belong to different books.
    BookMismatch,
    /// The line ranges share no line.
    Disjoint,
    /// Rejected by the legacy nesting predicate.
    ImproperNesting,
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Inconsistency::Dangling => "link does not resolve",
            Inconsistency::OneSided => "link is not recorded on both sides",
            Inconsistency::BookMismatch => "verses belong to different books",
            Inconsistency::Disjoint => "line ranges do not overlap",
            Inconsistency::ImproperNesting => "line ranges overlap improperly",
        };
        f.write_str(text)
    }
}

/// An alignment inconsistency between a source and a translation verse.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "incorrect correspondence between source verse {source_book}:{source_lines} \
     and translation verse {translation_book}:{translation_lines}: {reason}"
)]
pub struct AlignmentError {
    pub source_book: u32,
    pub source_lines: LineRange,
    pub translation_book: u32,
    pub translation_lines: LineRange,
    pub reason: Inconsistency,
}

impl AlignmentError {
    fn new(source: &Verse, translation: &Verse, reason: Inconsistency) -> Self {
        Self {
            source_book: source.book,
            source_lines: source.lines,
            translation_book: translation.book,
            translation_lines: translation.lines,
            reason,
        }
    }
}

/// The nesting predicate carried over from the first consistency checker.
///
/// Its first branch accepts unless the source starts strictly after and
/// ends strictly before the translation; the second branch then accepts
/// exactly that case. As written it never rejects anything. Kept verbatim
/// until the intended shape is confirmed.
pub fn improperly_nested(source: LineRange, translation: LineRange) -> bool {
    let (s_start, s_end) = (source.start(), source.end());
    let (t_start, t_end) = (translation.start(), translation.end());

    if s_start <= t_start || s_end >= t_end {
        false
    } else {
        !(s_start >= t_start || s_end <= t_end)
    }
}

/// Verify every link of `text`.
///
/// # Errors
///
/// Returns the first inconsistency found.
pub fn verify(text: &ParallelText) -> Result<(), AlignmentError> {
    for side in [Side::Source, Side::Translation] {
        let own = text.side(side);
        let other = text.side(side.other());

        for (index, verse) in own.iter().enumerate() {
            for &link in &verse.corresponding {
                let Some(partner) = other.get(link) else {
                    return Err(oriented(side, verse, verse, Inconsistency::Dangling));
                };
                if let Some(reason) = check_pair(verse, index, partner, side) {
                    return Err(oriented(side, verse, partner, reason));
                }
            }
        }
    }
    Ok(())
}

fn check_pair(verse: &Verse, index: usize, partner: &Verse, side: Side) -> Option<Inconsistency> {
    let (source, translation) = match side {
        Side::Source => (verse, partner),
        Side::Translation => (partner, verse),
    };

    if !partner.corresponding.contains(&index) {
        Some(Inconsistency::OneSided)
    } else if source.book != translation.book {
        Some(Inconsistency::BookMismatch)
    } else if !source.lines.overlaps(&translation.lines) {
        Some(Inconsistency::Disjoint)
    } else if improperly_nested(source.lines, translation.lines) {
        Some(Inconsistency::ImproperNesting)
    } else {
        None
    }
}

/// Build the error with the source verse first regardless of walk side.
fn oriented(side: Side, verse: &Verse, partner: &Verse, reason: Inconsistency) -> AlignmentError {
    match side {
        Side::Source => AlignmentError::new(verse, partner, reason),
        Side::Translation => AlignmentError::new(partner, verse, reason),
    }
}
