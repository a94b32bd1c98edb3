use std::collections::BTreeMap;
use std::fmt;

/// A word read from a word list, tagged with its syllable count.
///
/// Words are created by the loader and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
	syllables: u8,
	text: String,
}

impl Word {
	/// Creates a word. `syllables` must be at least 1.
	pub fn new(syllables: u8, text: impl Into<String>) -> Self {
		debug_assert!(syllables >= 1, "a word has at least one syllable");
		Self { syllables, text: text.into() }
	}

	pub fn syllables(&self) -> u8 {
		self.syllables
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Length in characters (not bytes).
	pub fn char_len(&self) -> usize {
		self.text.chars().count()
	}
}

impl fmt::Display for Word {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

/// Ordered list of words that also groups them by syllable count.
///
/// Every word added gets an insertion index (0-based, shared across all
/// groups). The flat sequence and the per-syllable groups are always
/// updated together.
///
/// ## Invariants
/// - `groups[s]` holds exactly the words of `words` with `s` syllables
/// - Entries of each group are in insertion order
#[derive(Clone, Debug, Default)]
pub struct WordList {
	words: Vec<Word>,
	groups: BTreeMap<u8, Vec<(usize, Word)>>,
}

impl WordList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a word at the end of the list.
	pub fn push(&mut self, word: Word) {
		let index = self.words.len();
		self.groups
			.entry(word.syllables())
			.or_default()
			.push((index, word.clone()));
		self.words.push(word);
	}

	/// Appends every word of `words`, keeping their order.
	pub fn extend<I: IntoIterator<Item = Word>>(&mut self, words: I) {
		for word in words {
			self.push(word);
		}
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// All words in insertion order.
	pub fn words(&self) -> &[Word] {
		&self.words
	}

	/// Words with `syllables` syllables, paired with their insertion index.
	///
	/// Returns an empty slice when no such word was added.
	pub fn group(&self, syllables: u8) -> &[(usize, Word)] {
		self.groups.get(&syllables).map(Vec::as_slice).unwrap_or(&[])
	}
}

impl FromIterator<Word> for WordList {
	fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
		let mut list = Self::new();
		list.extend(iter);
		list
	}
}
