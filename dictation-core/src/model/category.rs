use std::fmt;

use crate::error::DictationError;

/// Syllable counts whose word lists are checked before the first prompt.
///
/// `words4.txt` is left out: only mode 4 reads it, and a missing file is
/// reported as `MissingWordLists` when that mode loads it.
pub const STARTUP_SYLLABLES: [u8; 3] = [1, 2, 3];

/// Operation mode, selecting which two syllable categories are dictated.
///
/// | mode | categories |
/// |------|------------|
/// | 2    | 1 and 2    |
/// | 3    | 1 and 3    |
/// | 4    | 3 and 4    |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
	OneTwo,
	OneThree,
	ThreeFour,
}

impl Mode {
	pub const ALL: [Mode; 3] = [Mode::OneTwo, Mode::OneThree, Mode::ThreeFour];

	/// The number the user types to select this mode.
	pub fn number(self) -> u32 {
		match self {
			Mode::OneTwo => 2,
			Mode::OneThree => 3,
			Mode::ThreeFour => 4,
		}
	}

	/// The two syllable categories, in answer-key column order.
	pub fn categories(self) -> (u8, u8) {
		match self {
			Mode::OneTwo => (1, 2),
			Mode::OneThree => (1, 3),
			Mode::ThreeFour => (3, 4),
		}
	}

	/// Menu description, e.g. "слова с одним и двумя слогами".
	pub fn description(self) -> &'static str {
		match self {
			Mode::OneTwo => "слова с одним и двумя слогами",
			Mode::OneThree => "слова с одним и тремя слогами",
			Mode::ThreeFour => "слова с тремя и четырьмя слогами",
		}
	}
}

impl TryFrom<u32> for Mode {
	type Error = DictationError;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		Mode::ALL
			.into_iter()
			.find(|mode| mode.number() == value)
			.ok_or(DictationError::UnknownMode(value))
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.number())
	}
}

/// Column label for a syllable count: "1 слог", "2 слога", ...
pub fn syllable_label(syllables: u8) -> String {
	if syllables == 1 {
		format!("{} слог", syllables)
	} else {
		format!("{} слога", syllables)
	}
}
