//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`LineRange`] - Inclusive, ordered range of poem line numbers
//! - [`VerseId`] - Persisted identifier for a verse within one artifact
//! - [`Side`] - Which of the two parallel collections a verse belongs to
//!
//! # Validation
//!
//! These types enforce validity at construction time. A `LineRange` whose
//! start lies after its end cannot be represented.
//!
//! # Examples
//!
//! ```
//! use versealign::core::types::{LineRange, VerseId};
//!
//! let range = LineRange::new(10, 20).unwrap();
//! assert!(range.overlaps(&LineRange::new(20, 30).unwrap()));
//! assert!(!range.overlaps(&LineRange::new(21, 30).unwrap()));
//!
//! assert!(LineRange::new(5, 4).is_err());
//!
//! let id = VerseId::new("L", 3);
//! assert_eq!(id.as_str(), "L3");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid line range: start {start} is after end {end}")]
    InvertedRange { start: u32, end: u32 },

    #[error("invalid verse id: {0}")]
    InvalidVerseId(String),
}

/// An inclusive range of line numbers, `start..=end`.
///
/// Serialized as a two-element array `[start, end]`, which is the
/// `line_numbers` field of the persisted verse records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    /// Create a new validated line range.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvertedRange` if `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self, TypeError> {
        if start > end {
            return Err(TypeError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First line of the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last line of the range (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// A range covering exactly `line`.
    pub fn single(line: u32) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Check whether `line` falls inside the range.
    pub fn contains(&self, line: u32) -> bool {
        self.start <= line && line <= self.end
    }

    /// Check whether two ranges share at least one line.
    ///
    /// Touching ranges overlap: `(10, 20)` and `(20, 30)` share line 20.
    pub fn overlaps(&self, other: &LineRange) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}

impl TryFrom<[u32; 2]> for LineRange {
    type Error = TypeError;

    fn try_from(value: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(value[0], value[1])
    }
}

impl From<LineRange> for [u32; 2] {
    fn from(range: LineRange) -> Self {
        [range.start, range.end]
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Identifier of a verse inside one persisted artifact.
///
/// Identifiers are `<prefix><index>` and are only stable for a given
/// in-memory ordering; they are regenerated on every build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerseId(String);

impl VerseId {
    /// Build the identifier for the verse at `index`.
    pub fn new(prefix: &str, index: usize) -> Self {
        Self(format!("{}{}", prefix, index))
    }

    /// Wrap an identifier read from an artifact.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidVerseId` if the identifier is empty.
    pub fn parse(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::InvalidVerseId(
                "verse id cannot be empty".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VerseId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<VerseId> for String {
    fn from(id: VerseId) -> Self {
        id.0
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two parallel collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The source-language collection.
    Source,
    /// The translation collection.
    Translation,
}

impl Side {
    /// The other collection.
    pub fn other(self) -> Side {
        match self {
            Side::Source => Side::Translation,
            Side::Translation => Side::Source,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Translation => f.write_str("translation"),
        }
    }
}
