//! core
//!
//! Core domain types and algorithms for versealign.
//!
//! # Modules
//!
//! - [`types`] - Strong types: LineRange, VerseId, Side
//! - [`token`] - The flat token stream
//! - [`tokenize`] - Markup tree to token stream
//! - [`segment`] - Token stream to verses
//! - [`verse`] - Verse records and the index-linked parallel text
//! - [`loader`] - Reading a directory of book documents
//! - [`align`] - Line-range overlap alignment
//! - [`verify`] - Correspondence verification
//! - [`artifact`] - Persisted record schema and storage
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for project files
//!
//! # Design Principles
//!
//! - Invalid line ranges cannot be constructed
//! - Correspondences are indices, never references
//! - Every step is deterministic for a given input ordering

pub mod align;
pub mod artifact;
pub mod config;
pub mod loader;
pub mod paths;
pub mod segment;
pub mod token;
pub mod tokenize;
pub mod types;
pub mod verify;
pub mod verse;
