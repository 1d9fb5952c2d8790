//! core::loader
//!
//! Reading book documents from disk and segmenting them into verses.
//!
//! # Layout
//!
//! A collection is a directory of markup files, one per book. Files are
//! processed in lexicographic file-name order and filtered by extension.
//! Each file must contain a `div1` element; its `n` attribute is the book
//! number (`0` when absent).

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;

use super::segment::{build_verses, SegmentError};
use super::tokenize::flatten_book;
use super::verse::Verse;

const BOOK_TAG: &str = "div1";

/// Errors from loading a collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read collection directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read document '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse document '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("no <div1> element found in '{0}'")]
    MissingBook(PathBuf),

    #[error("invalid book number '{value}' in '{path}'")]
    InvalidBookNumber { path: PathBuf, value: String },

    #[error("failed to segment '{path}': {source}")]
    Segment {
        path: PathBuf,
        source: SegmentError,
    },
}

/// Verses of one book document.
#[derive(Debug)]
pub struct BookVerses {
    /// The document the verses came from.
    pub path: PathBuf,
    /// Book number read from `div1 n`.
    pub book: u32,
    /// The book's verses in document order.
    pub verses: Vec<Verse>,
}

/// List the documents of a collection, sorted by file name.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|e| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Parse one book document into verses.
pub fn parse_book(path: &Path) -> Result<BookVerses, LoadError> {
    let contents = fs::read_to_string(path).map_err(|e| LoadError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_book_str(path, &contents)
}

/// Parse a book from already-read markup. `path` is only used for errors.
pub fn parse_book_str(path: &Path, contents: &str) -> Result<BookVerses, LoadError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(contents, options).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let div = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == BOOK_TAG)
        .ok_or_else(|| LoadError::MissingBook(path.to_path_buf()))?;

    let book = book_number(path, div)?;
    let verses = build_verses(flatten_book(div), book).map_err(|e| LoadError::Segment {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(BookVerses {
        path: path.to_path_buf(),
        book,
        verses,
    })
}

/// Load every book in `dir`, in file-name order.
pub fn load_books(dir: &Path, extension: &str) -> Result<Vec<BookVerses>, LoadError> {
    discover(dir, extension)?
        .iter()
        .map(|path| parse_book(path))
        .collect()
}

/// Load a whole collection as one ordered verse list.
pub fn load_collection(dir: &Path, extension: &str) -> Result<Vec<Verse>, LoadError> {
    Ok(load_books(dir, extension)?
        .into_iter()
        .flat_map(|book| book.verses)
        .collect())
}

fn book_number(path: &Path, div: Node<'_, '_>) -> Result<u32, LoadError> {
    match div.attribute("n") {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| LoadError::InvalidBookNumber {
                path: path.to_path_buf(),
                value: raw.to_string(),
            }),
    }
}
