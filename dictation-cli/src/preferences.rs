use dictation_core::model::category::Mode;

/// Word count offered when the user has not chosen one yet.
pub const DEFAULT_WORD_COUNT: usize = 16;

/// Choices remembered from the previous round, offered as defaults.
///
/// Passed into each round by the caller and returned updated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
	pub mode: Option<Mode>,
	pub word_count: Option<usize>,
}

impl Preferences {
	/// Remembered word count, or `DEFAULT_WORD_COUNT` on the first round.
	pub fn word_count_or_default(&self) -> usize {
		self.word_count.unwrap_or(DEFAULT_WORD_COUNT)
	}

	/// Preferences after a round played with `mode` and `word_count`.
	pub fn remember(self, mode: Mode, word_count: usize) -> Self {
		Self { mode: Some(mode), word_count: Some(word_count) }
	}
}
