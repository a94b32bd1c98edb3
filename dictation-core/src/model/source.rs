use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{DictationError, Result};
use crate::io;
use crate::model::word::Word;

/// Directory holding one `words{N}.txt` file per syllable count.
///
/// Each file is UTF-8 text with one word per line and no header.
#[derive(Clone, Debug)]
pub struct WordSource {
	dir: PathBuf,
}

impl WordSource {
	/// Creates a source reading from `dir`.
	pub fn new<P: AsRef<Path>>(dir: P) -> Self {
		Self { dir: dir.as_ref().to_path_buf() }
	}

	/// Checks that the word list of every syllable count in `syllables` exists.
	///
	/// # Errors
	/// `MissingWordLists` naming every absent file, not only the first one.
	pub fn check_available(&self, syllables: &[u8]) -> Result<()> {
		let missing: Vec<String> = syllables
			.iter()
			.filter(|&&s| !io::word_list_path(&self.dir, s).is_file())
			.map(|&s| io::word_list_name(s))
			.collect();

		if missing.is_empty() {
			Ok(())
		} else {
			Err(DictationError::MissingWordLists(missing))
		}
	}

	/// Loads every word of the list for `syllables`, in file order.
	///
	/// Blank lines are skipped; each remaining line becomes one `Word`
	/// tagged with `syllables`.
	///
	/// # Errors
	/// - `MissingWordLists` if the file does not exist
	/// - `Io` if it cannot be read (including invalid UTF-8)
	pub fn load(&self, syllables: u8) -> Result<Vec<Word>> {
		let path = io::word_list_path(&self.dir, syllables);
		let lines = io::read_file(&path).map_err(|source| match source.kind() {
			ErrorKind::NotFound => DictationError::MissingWordLists(vec![io::word_list_name(syllables)]),
			_ => DictationError::Io { path: path.clone(), source },
		})?;

		debug!("loaded {} words from {}", lines.len(), path.display());
		Ok(lines.into_iter().map(|line| Word::new(syllables, line)).collect())
	}
}
