//! core::tokenize
//!
//! Flattening of a book's markup tree into a [`Token`] stream.
//!
//! # Rules
//!
//! - Direct `<milestone>` children of the book become milestone tokens
//! - Each `<l>` child is flattened: its descendant text is concatenated in
//!   document order and whitespace-normalized, while milestones found at any
//!   depth inside the line are lifted out at their point of occurrence
//! - Text before a lifted milestone is appended to the most recent line
//!   token (or starts one if none exists yet); text after the last
//!   milestone becomes a new line token
//! - Every other child of the book is ignored
//!
//! # Example
//!
//! ```
//! use versealign::core::token::{Milestone, Token};
//! use versealign::core::tokenize::flatten_book;
//!
//! let xml = r#"<div1><l>arma <milestone unit="card" n="2"/> virumque</l></div1>"#;
//! let doc = roxmltree::Document::parse(xml).unwrap();
//! let tokens = flatten_book(doc.root_element());
//!
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::line("arma"),
//!         Token::Milestone(Milestone::card(2)),
//!         Token::line("virumque"),
//!     ]
//! );
//! ```

use roxmltree::Node;

use super::token::{Milestone, Token};

const LINE_TAG: &str = "l";
const MILESTONE_TAG: &str = "milestone";

/// Flatten a book element into a token stream.
pub fn flatten_book(book: Node<'_, '_>) -> Vec<Token> {
    let mut tokens = Vec::new();
    for child in book.children().filter(Node::is_element) {
        match child.tag_name().name() {
            LINE_TAG => flatten_line(child, &mut tokens),
            MILESTONE_TAG => tokens.push(Token::Milestone(milestone_of(child))),
            _ => {}
        }
    }
    tokens
}

/// Flatten one `<l>` element, appending to `tokens`.
pub fn flatten_line(line: Node<'_, '_>, tokens: &mut Vec<Token>) {
    let mut flattener = LineFlattener {
        tokens,
        buffer: String::new(),
    };
    flattener.walk(line);
    flattener.finish();
}

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn milestone_of(node: Node<'_, '_>) -> Milestone {
    Milestone::from_pairs(
        node.attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string())),
    )
}

/// Walks one line, buffering text until a milestone splits it.
struct LineFlattener<'t> {
    tokens: &'t mut Vec<Token>,
    buffer: String,
}

impl LineFlattener<'_> {
    fn walk(&mut self, node: Node<'_, '_>) {
        for child in node.children() {
            if child.is_text() {
                if let Some(text) = child.text() {
                    self.buffer.push_str(text);
                }
            } else if child.is_element() {
                if child.tag_name().name() == MILESTONE_TAG {
                    self.split(milestone_of(child));
                } else {
                    self.walk(child);
                }
            }
        }
    }

    fn split(&mut self, milestone: Milestone) {
        let prefix = normalize_text(&self.buffer);
        self.buffer.clear();
        if !prefix.is_empty() {
            append_to_previous_line(self.tokens, prefix);
        }
        self.tokens.push(Token::Milestone(milestone));
    }

    fn finish(self) {
        let rest = normalize_text(&self.buffer);
        if !rest.is_empty() {
            self.tokens.push(Token::Line(rest));
        }
    }
}

/// Append `text` to the latest line token, or push it as a new one.
fn append_to_previous_line(tokens: &mut Vec<Token>, text: String) {
    let previous = tokens.iter_mut().rev().find_map(|token| match token {
        Token::Line(line) => Some(line),
        Token::Milestone(_) => None,
    });
    match previous {
        Some(line) => {
            line.push(' ');
            line.push_str(&text);
        }
        None => tokens.push(Token::Line(text)),
    }
}
