//! core::token
//!
//! The flat token stream produced from a book's markup.

use std::collections::BTreeMap;

/// Value of the `unit` attribute marking a verse (card) boundary.
pub const UNIT_CARD: &str = "card";

/// Value of the `unit` attribute marking a paragraph boundary.
pub const UNIT_PARA: &str = "para";

/// One item of the flattened stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A normalized line of text.
    Line(String),
    /// An out-of-band structural marker.
    Milestone(Milestone),
}

impl Token {
    /// Shorthand for a line token.
    pub fn line(text: impl Into<String>) -> Self {
        Token::Line(text.into())
    }
}

/// Attributes of a `<milestone>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Milestone {
    pub attributes: BTreeMap<String, String>,
}

impl Milestone {
    /// Build a milestone from attribute pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// A card boundary starting at line `n`.
    pub fn card(n: u32) -> Self {
        Self::from_pairs([("unit", UNIT_CARD.to_string()), ("n", n.to_string())])
    }

    /// A paragraph boundary.
    pub fn para() -> Self {
        Self::from_pairs([("unit", UNIT_PARA)])
    }

    /// Look up an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The `unit` attribute, if present.
    pub fn unit(&self) -> Option<&str> {
        self.get("unit")
    }
}

impl From<Milestone> for Token {
    fn from(milestone: Milestone) -> Self {
        Token::Milestone(milestone)
    }
}
