//! Domain model of a dictation exercise.
//!
//! - Word records and the insertion-ordered `WordList`
//! - Operation modes and their syllable categories (`Mode`)
//! - Word-list loading (`WordSource`)
//! - Sampling and shuffling (`Session`)
//! - Answer-key and dictation-list rendering (`AnswerKey`)

/// A single word tagged with its syllable count, and `WordList`,
/// which groups words by syllable count while keeping insertion order.
pub mod word;

/// Operation modes (2, 3, 4) and the syllable pair each one selects.
pub mod category;

/// Loads `words{N}.txt` files from a directory.
///
/// Also checks upfront that every required file exists.
pub mod source;

/// Random sampling of two categories and the resulting dictation order.
pub mod session;

/// Fixed-width text rendering of the dictation list and the answer key.
pub mod answer_key;
