//! core::artifact
//!
//! Persisted form of a linked [`ParallelText`].
//!
//! # Overview
//!
//! A parallel text is persisted as two artifacts, one per collection. Each
//! verse gets an identifier `<prefix><index>` and stores the identifiers of
//! its corresponding verses from the other artifact in place of indices.
//!
//! # Round-trip
//!
//! - [`encode`] is order-stable: verse `i` becomes record `i` with id
//!   `<prefix>i`
//! - [`decode`] rebuilds both collections with empty links, then resolves
//!   identifiers from both artifacts and links symmetrically
//! - Identifiers that do not resolve are skipped and counted in
//!   [`DecodeReport::skipped_links`], never reported as errors
//!
//! # Modules
//!
//! - [`schema`] - The record type shared by both artifacts
//! - [`store`] - Reading and writing artifact files

pub mod schema;
pub mod store;

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use super::types::{Side, VerseId};
use super::verse::{ParallelText, Verse};
use schema::VerseRecord;

/// Errors from artifact operations.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse artifact '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to write artifact '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize artifact: {0}")]
    Serialize(String),

    #[error("duplicate verse id '{id}' in {side} artifact")]
    DuplicateId { side: Side, id: VerseId },
}

/// Identifier prefixes for the two artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPrefixes {
    pub source: String,
    pub translation: String,
}

impl Default for IdPrefixes {
    fn default() -> Self {
        Self {
            source: "L".to_string(),
            translation: "E".to_string(),
        }
    }
}

/// Records for both artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    pub source: Vec<VerseRecord>,
    pub translation: Vec<VerseRecord>,
}

/// Outcome details of [`decode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Identifiers that named no record in the other artifact.
    pub skipped_links: usize,
}

/// Convert a linked text into artifact records.
pub fn encode(text: &ParallelText, prefixes: &IdPrefixes) -> EncodedText {
    EncodedText {
        source: encode_side(&text.source, &prefixes.source, &prefixes.translation),
        translation: encode_side(&text.translation, &prefixes.translation, &prefixes.source),
    }
}

fn encode_side(verses: &[Verse], own_prefix: &str, other_prefix: &str) -> Vec<VerseRecord> {
    verses
        .iter()
        .enumerate()
        .map(|(index, verse)| VerseRecord {
            book: verse.book,
            line_numbers: verse.lines,
            paragraphs: verse.paragraphs.clone(),
            id: VerseId::new(own_prefix, index),
            corresponding_ids: verse
                .corresponding
                .iter()
                .map(|&other| VerseId::new(other_prefix, other))
                .collect(),
        })
        .collect()
}

/// Rebuild a linked text from artifact records.
///
/// # Errors
///
/// Returns `ArtifactError::DuplicateId` if an artifact reuses an id.
pub fn decode(
    source: &[VerseRecord],
    translation: &[VerseRecord],
) -> Result<(ParallelText, DecodeReport), ArtifactError> {
    let source_lookup = index_ids(source, Side::Source)?;
    let translation_lookup = index_ids(translation, Side::Translation)?;

    let mut text = ParallelText::new(verses_of(source), verses_of(translation));
    let mut report = DecodeReport::default();

    for (source_index, record) in source.iter().enumerate() {
        for id in &record.corresponding_ids {
            match translation_lookup.get(id) {
                Some(&translation_index) => {
                    text.link(source_index, translation_index);
                }
                None => report.skipped_links += 1,
            }
        }
    }

    for (translation_index, record) in translation.iter().enumerate() {
        for id in &record.corresponding_ids {
            match source_lookup.get(id) {
                Some(&source_index) => {
                    text.link(source_index, translation_index);
                }
                None => report.skipped_links += 1,
            }
        }
    }

    Ok((text, report))
}

fn index_ids(records: &[VerseRecord], side: Side) -> Result<HashMap<&VerseId, usize>, ArtifactError> {
    let mut lookup = HashMap::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if lookup.insert(&record.id, index).is_some() {
            return Err(ArtifactError::DuplicateId {
                side,
                id: record.id.clone(),
            });
        }
    }
    Ok(lookup)
}

fn verses_of(records: &[VerseRecord]) -> Vec<Verse> {
    records
        .iter()
        .map(|r| Verse::new(r.book, r.line_numbers, r.paragraphs.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::align::align;
    use crate::core::types::LineRange;

    fn verse(book: u32, start: u32, end: u32, text: &str) -> Verse {
        Verse::new(
            book,
            LineRange::new(start, end).unwrap(),
            vec![vec![text.to_string()]],
        )
    }

    fn sample() -> ParallelText {
        let mut text = ParallelText::new(
            vec![verse(1, 1, 10, "arma"), verse(1, 11, 20, "cano")],
            vec![verse(1, 1, 15, "arms"), verse(1, 16, 20, "sing")],
        );
        align(&mut text);
        text
    }

    fn ids(record: &VerseRecord) -> Vec<&str> {
        record.corresponding_ids.iter().map(VerseId::as_str).collect()
    }

    #[test]
    fn encode_assigns_positional_ids() {
        let encoded = encode(&sample(), &IdPrefixes::default());

        assert_eq!(encoded.source[0].id.as_str(), "L0");
        assert_eq!(encoded.source[1].id.as_str(), "L1");
        assert_eq!(encoded.translation[1].id.as_str(), "E1");
        assert_eq!(ids(&encoded.source[1]), vec!["E0", "E1"]);
        assert_eq!(ids(&encoded.translation[0]), vec!["L0", "L1"]);
    }

    #[test]
    fn encode_honors_custom_prefixes() {
        let prefixes = IdPrefixes {
            source: "lat-".into(),
            translation: "eng-".into(),
        };
        let encoded = encode(&sample(), &prefixes);
        assert_eq!(encoded.source[0].id.as_str(), "lat-0");
        assert_eq!(ids(&encoded.source[0]), vec!["eng-0"]);
    }

    #[test]
    fn decode_restores_text() {
        let text = sample();
        let encoded = encode(&text, &IdPrefixes::default());

        let (decoded, report) = decode(&encoded.source, &encoded.translation).unwrap();

        assert_eq!(decoded, text);
        assert_eq!(report.skipped_links, 0);
    }

    #[test]
    fn decode_skips_dangling_ids() {
        let mut encoded = encode(&sample(), &IdPrefixes::default());
        encoded.source[0]
            .corresponding_ids
            .push(VerseId::parse("E99").unwrap());

        let (decoded, report) = decode(&encoded.source, &encoded.translation).unwrap();

        assert_eq!(report.skipped_links, 1);
        assert_eq!(decoded.source[0].corresponding, vec![0]);
    }

    #[test]
    fn decode_links_from_either_side() {
        let mut encoded = encode(&sample(), &IdPrefixes::default());
        // Drop the source-side references; the translation side still has them.
        for record in &mut encoded.source {
            record.corresponding_ids.clear();
        }

        let (decoded, _) = decode(&encoded.source, &encoded.translation).unwrap();

        assert_eq!(decoded.source[1].corresponding, vec![0, 1]);
        assert_eq!(decoded.translation[1].corresponding, vec![1]);
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let mut encoded = encode(&sample(), &IdPrefixes::default());
        encoded.translation[1].id = VerseId::parse("E0").unwrap();

        let err = decode(&encoded.source, &encoded.translation).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::DuplicateId {
                side: Side::Translation,
                ..
            }
        ));
    }
}
