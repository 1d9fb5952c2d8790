//! ui
//!
//! Terminal output. Every command prints through [`output`] so that
//! `--quiet` and `--debug` behave identically everywhere.

pub mod output;
