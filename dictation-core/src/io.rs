use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Reads a text file and returns its non-empty lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Trims surrounding whitespace and drops blank lines
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// File name of the word list holding words with `syllables` syllables.
///
/// Example: `3` → `words3.txt`
pub(crate) fn word_list_name(syllables: u8) -> String {
	format!("words{}.txt", syllables)
}

/// Full path of a word list inside `dir`.
pub(crate) fn word_list_path<P: AsRef<Path>>(dir: P, syllables: u8) -> PathBuf {
	dir.as_ref().join(word_list_name(syllables))
}
