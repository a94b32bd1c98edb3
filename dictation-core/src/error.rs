use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading word lists or building a session.
#[derive(Error, Debug)]
pub enum DictationError {
	/// One or more word-list files are absent. Holds the file names.
	#[error("word list not found: {}", .0.join(", "))]
	MissingWordLists(Vec<String>),

	/// A word-list file exists but could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The requested mode is not one of 2, 3 or 4.
	#[error("mode {0} does not exist")]
	UnknownMode(u32),

	/// A session needs at least one word per category.
	#[error("word count must be at least 2, got {0}")]
	InvalidWordCount(usize),

	/// A category has fewer words than the session must draw from it.
	#[error("{requested} words with {syllables} syllable(s) requested, but only {available} available")]
	InsufficientWords {
		syllables: u8,
		requested: usize,
		available: usize,
	},
}

pub type Result<T> = std::result::Result<T, DictationError>;
