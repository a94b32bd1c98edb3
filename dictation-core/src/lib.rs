//! Syllable dictation exercise generator.
//!
//! This crate provides everything needed to build a dictation session:
//! - Loading per-syllable word lists from plain-text files
//! - Sampling two syllable categories and shuffling them into dictation order
//! - Rendering the dictation list and the two-column answer key
//!
//! Console interaction lives in the `dictation-cli` binary; this crate
//! performs no terminal I/O.

/// Error type shared by every operation in the crate.
pub mod error;

/// Word records, modes, word sources, sessions and answer keys.
pub mod model;

/// File helpers (reading word lists, building word-list paths).
///
/// Not exposed
pub(crate) mod io;

pub use error::{DictationError, Result};
