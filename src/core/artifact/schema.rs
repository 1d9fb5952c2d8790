//! core::artifact::schema
//!
//! Persisted verse record schema.
//!
//! # Schema Design
//!
//! Both artifacts are JSON arrays of the same record type. Field names are
//! part of the compatibility contract with existing consumers, so they are
//! fixed here with serde renames rather than following Rust naming.
//!
//! # Example
//!
//! ```
//! use versealign::core::artifact::schema::VerseRecord;
//!
//! let json = r#"{
//!     "book": 1,
//!     "line_numbers": [1, 33],
//!     "paragraphs": [["Arma virumque cano"]],
//!     "id": "L0",
//!     "correspondingIds": ["E0", "E1"]
//! }"#;
//!
//! let record: VerseRecord = serde_json::from_str(json).unwrap();
//! assert_eq!(record.id.as_str(), "L0");
//! assert_eq!(record.corresponding_ids.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::types::{LineRange, VerseId};

/// One verse as stored in an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Book number.
    pub book: u32,

    /// Inclusive `[start, end]` line range.
    pub line_numbers: LineRange,

    /// Paragraphs of line texts.
    pub paragraphs: Vec<Vec<String>>,

    /// Identifier, unique within this artifact.
    pub id: VerseId,

    /// Identifiers of corresponding records in the other artifact.
    #[serde(rename = "correspondingIds", default)]
    pub corresponding_ids: Vec<VerseId>,
}
