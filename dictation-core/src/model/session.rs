use log::{debug, info};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::{DictationError, Result};
use crate::model::category::Mode;
use crate::model::source::WordSource;
use crate::model::word::{Word, WordList};

/// A word of the answer key together with its dictation number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
	/// 1-based position of `word` in the dictation order.
	pub number: usize,
	pub word: Word,
}

/// One dictation exercise.
///
/// Holds the shuffled dictation order and, for each of the two categories,
/// the words in the order they were drawn, each tagged with its number in
/// the dictation order.
///
/// ## Invariants
/// - `dictation` is a permutation of the words of `left` and `right`
/// - `left.len() == total / 2` and `left.len() + right.len() == total`
/// - `dictation[e.number - 1] == e.word` for every entry `e`
#[derive(Clone, Debug)]
pub struct Session {
	mode: Mode,
	dictation: Vec<Word>,
	left: Vec<Entry>,
	right: Vec<Entry>,
}

impl Session {
	/// Loads both word lists of `mode` from `source` and draws a session of
	/// `total` words.
	///
	/// # Errors
	/// - `InvalidWordCount` if `total < 2`
	/// - Any loading error of `WordSource::load`
	/// - `InsufficientWords` if a list is too short for its share
	pub fn build<R: Rng + ?Sized>(source: &WordSource, mode: Mode, total: usize, rng: &mut R) -> Result<Self> {
		if total < 2 {
			return Err(DictationError::InvalidWordCount(total));
		}
		let (first, second) = mode.categories();
		let first_pool = source.load(first)?;
		let second_pool = source.load(second)?;
		Self::draw(mode, &first_pool, &second_pool, total, rng)
	}

	/// Draws a session of `total` words from already loaded pools.
	///
	/// The first category gets `total / 2` words and the second gets the rest,
	/// so both shares always add up to `total`. Sampling is without
	/// replacement; the combined draw is then shuffled into dictation order.
	///
	/// Pools are expected to hold words of the corresponding category of
	/// `mode`.
	pub fn draw<R: Rng + ?Sized>(
		mode: Mode,
		first_pool: &[Word],
		second_pool: &[Word],
		total: usize,
		rng: &mut R,
	) -> Result<Self> {
		if total < 2 {
			return Err(DictationError::InvalidWordCount(total));
		}
		let (first, second) = mode.categories();
		info!("building mode {} session with {} words", mode, total);

		let mut drawn = WordList::new();
		for (syllables, pool) in [(first, first_pool), (second, second_pool)] {
			let requested = if drawn.is_empty() { total / 2 } else { total - drawn.len() };
			if requested > pool.len() {
				return Err(DictationError::InsufficientWords {
					syllables,
					requested,
					available: pool.len(),
				});
			}
			debug!("drawing {} of {} words with {} syllable(s)", requested, pool.len(), syllables);
			drawn.extend(pool.choose_multiple(rng, requested).cloned());
		}

		// order[j] is the draw index of the j-th dictated word
		let mut order: Vec<usize> = (0..drawn.len()).collect();
		order.shuffle(rng);
		let mut position = vec![0; order.len()];
		for (j, &i) in order.iter().enumerate() {
			position[i] = j;
		}

		let dictation = order.iter().map(|&i| drawn.words()[i].clone()).collect();
		let column = |syllables: u8| -> Vec<Entry> {
			drawn
				.group(syllables)
				.iter()
				.map(|(i, word)| Entry { number: position[*i] + 1, word: word.clone() })
				.collect()
		};

		Ok(Self {
			mode,
			dictation,
			left: column(first),
			right: column(second),
		})
	}

	/// Syllable counts of the left and right answer-key columns.
	pub fn categories(&self) -> (u8, u8) {
		self.mode.categories()
	}

	/// Words in dictation order.
	pub fn dictation(&self) -> &[Word] {
		&self.dictation
	}

	/// Entries of the left (first category) column, in draw order.
	pub fn left(&self) -> &[Entry] {
		&self.left
	}

	/// Entries of the right (second category) column, in draw order.
	pub fn right(&self) -> &[Entry] {
		&self.right
	}

	pub(crate) fn len(&self) -> usize {
		self.dictation.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::collections::HashSet;
	use std::fs;

	fn pool(syllables: u8, prefix: &str, count: usize) -> Vec<Word> {
		(0..count).map(|i| Word::new(syllables, format!("{}{}", prefix, i))).collect()
	}

	fn draw(mode: Mode, total: usize, seed: u64) -> Session {
		let (first, second) = mode.categories();
		let mut rng = StdRng::seed_from_u64(seed);
		Session::draw(mode, &pool(first, "a", 20), &pool(second, "b", 20), total, &mut rng).unwrap()
	}

	#[test]
	fn shares_split_floor_half_then_remainder() {
		for total in 2..=30 {
			let session = draw(Mode::OneThree, total, total as u64);
			assert_eq!(session.left().len(), total / 2);
			assert_eq!(session.left().len() + session.right().len(), total);
			assert_eq!(session.len(), total);
		}
	}

	#[test]
	fn dictation_is_a_permutation_of_both_samples() {
		let session = draw(Mode::OneTwo, 11, 7);
		let mut dictated: Vec<&Word> = session.dictation().iter().collect();
		let mut drawn: Vec<&Word> = session.left().iter().chain(session.right()).map(|e| &e.word).collect();
		dictated.sort_by_key(|w| w.text().to_owned());
		drawn.sort_by_key(|w| w.text().to_owned());
		assert_eq!(dictated, drawn);

		let unique: HashSet<&str> = session.dictation().iter().map(Word::text).collect();
		assert_eq!(unique.len(), 11);
	}

	#[test]
	fn entry_numbers_point_into_dictation_order() {
		let session = draw(Mode::ThreeFour, 9, 3);
		for entry in session.left().iter().chain(session.right()) {
			assert_eq!(session.dictation()[entry.number - 1], entry.word);
		}
		let mut numbers: Vec<usize> = session.left().iter().chain(session.right()).map(|e| e.number).collect();
		numbers.sort_unstable();
		assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
	}

	#[test]
	fn columns_hold_their_own_category() {
		let session = draw(Mode::ThreeFour, 6, 1);
		assert!(session.left().iter().all(|e| e.word.syllables() == 3));
		assert!(session.right().iter().all(|e| e.word.syllables() == 4));
		assert_eq!(session.categories(), (3, 4));
	}

	#[test]
	fn same_seed_gives_same_session() {
		let a = draw(Mode::OneTwo, 8, 99);
		let b = draw(Mode::OneTwo, 8, 99);
		assert_eq!(a.dictation(), b.dictation());
	}

	#[test]
	fn exact_pool_size_is_allowed() {
		let mut rng = StdRng::seed_from_u64(5);
		let session = Session::draw(Mode::OneTwo, &pool(1, "a", 2), &pool(2, "b", 3), 5, &mut rng).unwrap();
		assert_eq!(session.left().len(), 2);
		assert_eq!(session.right().len(), 3);
	}

	#[test]
	fn oversampling_is_an_error() {
		let mut rng = StdRng::seed_from_u64(5);
		let err = Session::draw(Mode::OneTwo, &pool(1, "a", 10), &pool(2, "b", 2), 6, &mut rng).unwrap_err();
		match err {
			DictationError::InsufficientWords { syllables, requested, available } => {
				assert_eq!((syllables, requested, available), (2, 3, 2));
			}
			other => panic!("expected InsufficientWords, got {:?}", other),
		}
	}

	#[test]
	fn fewer_than_two_words_is_rejected() {
		let mut rng = StdRng::seed_from_u64(0);
		for total in [0, 1] {
			let result = Session::draw(Mode::OneTwo, &pool(1, "a", 5), &pool(2, "b", 5), total, &mut rng);
			assert!(matches!(result, Err(DictationError::InvalidWordCount(t)) if t == total));
		}
	}

	#[test]
	fn build_loads_both_lists_of_the_mode() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("words1.txt"), "кот\nдом\nлес\n").unwrap();
		fs::write(dir.path().join("words2.txt"), "мама\nпапа\nрыба\n").unwrap();

		let mut rng = StdRng::seed_from_u64(11);
		let session = Session::build(&WordSource::new(dir.path()), Mode::OneTwo, 4, &mut rng).unwrap();
		assert_eq!(session.len(), 4);
		assert_eq!(session.categories(), (1, 2));
		assert!(session.left().iter().all(|e| ["кот", "дом", "лес"].contains(&e.word.text())));
		assert!(session.right().iter().all(|e| ["мама", "папа", "рыба"].contains(&e.word.text())));
	}

	#[test]
	fn build_fails_when_a_mode_list_is_missing() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("words1.txt"), "кот\nдом\n").unwrap();

		let mut rng = StdRng::seed_from_u64(11);
		let result = Session::build(&WordSource::new(dir.path()), Mode::OneTwo, 4, &mut rng);
		assert!(matches!(result, Err(DictationError::MissingWordLists(names)) if names == vec!["words2.txt"]));
	}
}
