//! versealign - Verse segmentation and alignment for parallel poetry collections
//!
//! versealign reads two collections of TEI-style book documents (a
//! source-language edition and a translation), splits each book into verses
//! at its card milestones, links verses of the two collections whose line
//! ranges overlap, and persists both collections as cross-referencing JSON
//! artifacts that can be reloaded and verified.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Build and check pipelines over configured locations
//! - [`core`] - Domain types, tokenizer, verse builder, aligner, artifacts
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! 1. Every verse covers a non-empty, ordered line range
//! 2. Correspondence is symmetric and free of duplicates
//! 3. Linked verses share a book and at least one line
//! 4. Reloading an artifact pair reproduces the linked collections

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
