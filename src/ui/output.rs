//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Diagnostics (debug, warnings, errors) go to stderr so stdout stays
//! clean for `--json` output.

use std::fmt::Display;

use crate::core::verse::Verse;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a verse heading, e.g. `Book 1, lines 1-33`.
pub fn format_heading(verse: &Verse) -> String {
    format!("Book {}, lines {}", verse.book, verse.lines)
}

/// Format a verse for display: heading, then paragraphs separated by a
/// blank line, each line indented.
pub fn format_verse(verse: &Verse) -> String {
    if verse.is_blank() {
        return format_heading(verse);
    }

    let body = verse
        .paragraphs
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| format_list(p, "    "))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{}\n{}", format_heading(verse), body)
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::LineRange;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn verse_formatting() {
        let verse = Verse::new(
            1,
            LineRange::new(1, 3).unwrap(),
            vec![vec!["a".into(), "b".into()], vec!["c".into()]],
        );
        assert_eq!(
            format_verse(&verse),
            "Book 1, lines 1-3\n    a\n    b\n\n    c"
        );
    }

    #[test]
    fn blank_verse_is_heading_only() {
        let verse = Verse::new(2, LineRange::new(4, 9).unwrap(), vec![]);
        assert_eq!(format_verse(&verse), "Book 2, lines 4-9");
    }
}
