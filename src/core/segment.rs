//! core::segment
//!
//! Grouping of a token stream into verses.
//!
//! # Rules
//!
//! - `milestone unit="card" n=N` closes the open verse with end `N - 1`
//!   and opens a new verse at line `N`
//! - `milestone unit="para"` starts a new paragraph, unless the current
//!   paragraph is still empty
//! - A line token before any card opens a verse at line 1; every line token
//!   advances the running line counter by one
//! - End of input closes the open verse at `counter - 1`
//! - Closing drops empty paragraphs but always keeps at least one
//!
//! # Invariants
//!
//! Every produced verse has `start <= end`. A verse that would close before
//! it starts is never emitted:
//! - without text (a trailing card with no lines after it, or two cards
//!   with the same `n`) it is discarded
//! - with text read before the first card (`<l>Arma <milestone
//!   unit="card" n="1"/> virumque</l>`) the text moves into the verse the
//!   card opens; if input ends first, it becomes a one-line verse at the
//!   card's line
//! - with text read after its own card it is a
//!   [`SegmentError::NonMonotonicCard`]
//!
//! Line numbers past `u32::MAX` are a [`SegmentError::LineOverflow`].
//!
//! # Example
//!
//! ```
//! use versealign::core::segment::build_verses;
//! use versealign::core::token::{Milestone, Token};
//!
//! let tokens = vec![
//!     Token::Milestone(Milestone::card(1)),
//!     Token::line("Arma virumque cano, Troiae qui primus ab oris"),
//!     Token::line("Italiam, fato profugus, Laviniaque venit"),
//!     Token::line("litora, multum ille et terris iactatus et alto"),
//!     Token::Milestone(Milestone::card(4)),
//!     Token::line("vi superum saevae memorem Iunonis ob iram;"),
//! ];
//!
//! let verses = build_verses(tokens, 1).unwrap();
//! assert_eq!(verses.len(), 2);
//! assert_eq!((verses[0].lines.start(), verses[0].lines.end()), (1, 3));
//! assert_eq!((verses[1].lines.start(), verses[1].lines.end()), (4, 4));
//! ```

use thiserror::Error;

use super::token::{Milestone, Token, UNIT_CARD, UNIT_PARA};
use super::types::LineRange;
use super::verse::Verse;

/// Errors from verse segmentation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("card milestone is missing its 'n' attribute")]
    MissingCardNumber,

    #[error("card milestone has invalid line number '{0}'")]
    InvalidCardNumber(String),

    #[error("card milestone n={next} closes verse starting at line {start} before it begins")]
    NonMonotonicCard { start: u32, next: u32 },

    #[error("line numbers overflow in verse starting at line {start}")]
    LineOverflow { start: u32 },
}

/// A verse that has been opened but not closed yet.
#[derive(Debug)]
struct OpenVerse {
    start: u32,
    /// Number the next line token will receive.
    next_line: u32,
    /// Opened by a card rather than by a line before any card.
    by_card: bool,
    /// Set once a line token is read after the card that opened the verse.
    anchored: bool,
    paragraphs: Vec<Vec<String>>,
}

impl OpenVerse {
    /// A verse opened by a card at line `start`, holding any text carried
    /// over from a verse that closed before it began.
    fn at(start: u32, carried: Vec<Vec<String>>) -> Self {
        Self {
            start,
            next_line: start,
            by_card: true,
            anchored: false,
            paragraphs: if carried.is_empty() {
                vec![Vec::new()]
            } else {
                carried
            },
        }
    }

    /// A verse opened by a line token before any card.
    fn implicit() -> Self {
        Self {
            by_card: false,
            ..Self::at(1, Vec::new())
        }
    }
}

/// Incremental verse builder for one book.
///
/// Feed tokens with [`VerseBuilder::push`], then call
/// [`VerseBuilder::finish`] to close the last verse.
#[derive(Debug)]
pub struct VerseBuilder {
    book: u32,
    open: Option<OpenVerse>,
    verses: Vec<Verse>,
}

impl VerseBuilder {
    /// Create a builder for the given book number.
    pub fn new(book: u32) -> Self {
        Self {
            book,
            open: None,
            verses: Vec::new(),
        }
    }

    /// Consume one token.
    ///
    /// # Errors
    ///
    /// Fails on a card milestone without a usable `n`, on a card that would
    /// close a verse holding its own text before its start line, and when
    /// line numbers run past `u32::MAX`.
    pub fn push(&mut self, token: Token) -> Result<(), SegmentError> {
        match token {
            Token::Milestone(milestone) => self.milestone(&milestone),
            Token::Line(text) => self.line(text),
        }
    }

    /// Close the open verse and return every verse built.
    pub fn finish(mut self) -> Result<Vec<Verse>, SegmentError> {
        if let Some(open) = self.open.take() {
            let start = open.start;
            let end = open.next_line.checked_sub(1);
            let stranded = self.close(open, end)?;
            if !stranded.is_empty() {
                self.verses
                    .push(Verse::new(self.book, LineRange::single(start), stranded));
            }
        }
        Ok(self.verses)
    }

    fn milestone(&mut self, milestone: &Milestone) -> Result<(), SegmentError> {
        match milestone.unit() {
            Some(UNIT_CARD) => {
                let n = card_number(milestone)?;
                let carried = match self.open.take() {
                    Some(open) => self.close(open, n.checked_sub(1))?,
                    None => Vec::new(),
                };
                self.open = Some(OpenVerse::at(n, carried));
            }
            Some(UNIT_PARA) => {
                if let Some(open) = self.open.as_mut() {
                    if open.paragraphs.last().is_some_and(|p| !p.is_empty()) {
                        open.paragraphs.push(Vec::new());
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn line(&mut self, text: String) -> Result<(), SegmentError> {
        let open = self.open.get_or_insert_with(OpenVerse::implicit);
        open.next_line = open
            .next_line
            .checked_add(1)
            .ok_or(SegmentError::LineOverflow { start: open.start })?;
        open.anchored |= open.by_card;
        match open.paragraphs.last_mut() {
            Some(paragraph) => paragraph.push(text),
            None => open.paragraphs.push(vec![text]),
        }
        Ok(())
    }

    /// Finalize `open` with the given end line (`None` means "before line 1").
    ///
    /// A verse that would end before it starts is not emitted. Without text
    /// it is dropped. Text that never followed its own card (lines read
    /// before the first card, or text carried in from such lines) is
    /// returned so the next verse can take it over. Anything else is a
    /// [`SegmentError::NonMonotonicCard`].
    fn close(
        &mut self,
        open: OpenVerse,
        end: Option<u32>,
    ) -> Result<Vec<Vec<String>>, SegmentError> {
        let paragraphs: Vec<Vec<String>> = open
            .paragraphs
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();

        match end.map(|end| LineRange::new(open.start, end)) {
            Some(Ok(lines)) => {
                self.verses.push(Verse::new(self.book, lines, paragraphs));
                Ok(Vec::new())
            }
            _ if paragraphs.is_empty() || !open.anchored => Ok(paragraphs),
            _ => Err(SegmentError::NonMonotonicCard {
                start: open.start,
                next: end.map_or(0, |e| e + 1),
            }),
        }
    }
}

/// Build all verses of one book from its token stream.
pub fn build_verses(
    tokens: impl IntoIterator<Item = Token>,
    book: u32,
) -> Result<Vec<Verse>, SegmentError> {
    let mut builder = VerseBuilder::new(book);
    for token in tokens {
        builder.push(token)?;
    }
    builder.finish()
}

fn card_number(milestone: &Milestone) -> Result<u32, SegmentError> {
    let raw = milestone.get("n").ok_or(SegmentError::MissingCardNumber)?;
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| SegmentError::InvalidCardNumber(raw.to_string()))
}
