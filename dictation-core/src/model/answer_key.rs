use std::fmt;

use crate::model::category::syllable_label;
use crate::model::session::{Entry, Session};

/// Extra spaces added to the longest word when sizing answer-key cells.
pub const CELL_MARGIN: usize = 10;

/// Two-column answer key of a session.
///
/// Each column lists one category's words in draw order, prefixed with the
/// word's dictation number. Row `i` pairs the `i`-th word of each column;
/// a column that runs out first renders blank cells.
///
/// ```text
///  1 слог          | 2 слога
/// ----------------------------------
///  3   кот         | 1   мама
///  2   дом         | 4   рыба
/// ```
pub struct AnswerKey<'a> {
	session: &'a Session,
	width: usize,
}

impl<'a> AnswerKey<'a> {
	pub fn new(session: &'a Session) -> Self {
		let (first, second) = session.categories();
		let entries = session.left().iter().chain(session.right());

		let longest_word = entries.clone().map(|e| e.word.char_len()).max().unwrap_or(0);
		let longest_cell = entries.map(|e| cell(e).chars().count()).max().unwrap_or(0);
		let longest_label = syllable_label(first).chars().count().max(syllable_label(second).chars().count());

		let width = (longest_word + CELL_MARGIN).max(longest_cell).max(longest_label);
		Self { session, width }
	}

	/// Column titles, e.g. ` 1 слог      | 2 слога     `.
	pub fn header(&self) -> String {
		let (first, second) = self.session.categories();
		self.line(&syllable_label(first), &syllable_label(second))
	}

	/// Dashes spanning the header.
	pub fn separator(&self) -> String {
		"-".repeat(self.header().chars().count())
	}

	/// Table rows, `ceil(N / 2)` of them.
	pub fn rows(&self) -> Vec<String> {
		let left = self.session.left();
		let right = self.session.right();
		let count = self.session.len().div_ceil(2);

		(0..count)
			.map(|i| {
				let l = left.get(i).map(cell).unwrap_or_default();
				let r = right.get(i).map(cell).unwrap_or_default();
				self.line(&l, &r)
			})
			.collect()
	}

	fn line(&self, left: &str, right: &str) -> String {
		format!(" {:<w$} | {:<w$}", left, right, w = self.width)
	}
}

impl fmt::Display for AnswerKey<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.header())?;
		writeln!(f, "{}", self.separator())?;
		for row in self.rows() {
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

/// Numbered dictation list: `#1 word`, `#2 word`, ...
pub struct DictationListing<'a>(pub &'a Session);

impl fmt::Display for DictationListing<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, word) in self.0.dictation().iter().enumerate() {
			writeln!(f, "#{} {}", i + 1, word)?;
		}
		Ok(())
	}
}

/// Dictation number left-aligned in three characters, then the word.
fn cell(entry: &Entry) -> String {
	format!("{:<3} {}", entry.number, entry.word)
}
