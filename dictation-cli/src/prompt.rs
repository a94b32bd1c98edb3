//! Console prompts.
//!
//! Parsing of user answers is kept in pure functions (`parse_mode`,
//! `parse_word_count`); `Prompter` does the reading and writing and is
//! generic over its streams so it can be driven from memory in tests.

use std::io::{self, BufRead, Write};

use dictation_core::model::category::Mode;

use crate::preferences::Preferences;

/// Outcome of parsing a word-count answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordCount {
	Accepted(usize),
	/// A number below 2.
	TooSmall,
	/// Anything that is not a number.
	NotANumber,
}

/// Parses a mode answer.
///
/// Empty input selects `remembered`, if any. Returns `None` when the
/// answer must be asked again.
pub fn parse_mode(input: &str, remembered: Option<Mode>) -> Option<Mode> {
	let input = input.trim();
	if input.is_empty() {
		return remembered;
	}
	if !input.chars().all(|c| c.is_ascii_digit()) {
		return None;
	}
	input.parse::<u32>().ok().and_then(|n| Mode::try_from(n).ok())
}

/// Parses a word-count answer. Empty input selects `default`.
pub fn parse_word_count(input: &str, default: usize) -> WordCount {
	let input = input.trim();
	if input.is_empty() {
		return WordCount::Accepted(default);
	}
	if !input.chars().all(|c| c.is_ascii_digit()) {
		return WordCount::NotANumber;
	}
	match input.parse::<usize>() {
		Ok(n) if n >= 2 => WordCount::Accepted(n),
		Ok(_) => WordCount::TooSmall,
		Err(_) => WordCount::NotANumber,
	}
}

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	/// Stream prompts and results are written to.
	pub fn output(&mut self) -> &mut W {
		&mut self.output
	}

	/// Writes `text`, then reads one line (without its line ending).
	///
	/// # Errors
	/// `UnexpectedEof` when the input is closed.
	pub fn ask(&mut self, text: &str) -> io::Result<String> {
		write!(self.output, "{}", text)?;
		self.output.flush()?;

		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
		}
		Ok(line.trim_end_matches(['\r', '\n']).to_owned())
	}

	/// Shows the mode menu until a valid mode is entered.
	pub fn choose_mode(&mut self, preferences: &Preferences) -> io::Result<Mode> {
		let mut first = true;
		loop {
			if !first {
				writeln!(self.output, "\nВы должны ввести один из перечисленных вариантов!\n")?;
			}
			first = false;

			writeln!(self.output, "Добро пожаловать! ")?;
			writeln!(self.output, "Выберите режим использования:")?;
			for mode in Mode::ALL {
				writeln!(self.output, "  {} - {}", mode, mode.description())?;
			}
			writeln!(self.output)?;

			let question = match preferences.mode {
				None => "Ваш выбор (введите цифру): ".to_owned(),
				Some(mode) => format!("Ваш выбор (по умолчанию {}): ", mode),
			};
			let answer = self.ask(&question)?;
			if let Some(mode) = parse_mode(&answer, preferences.mode) {
				return Ok(mode);
			}
		}
	}

	/// Asks for the number of words until a valid count is entered.
	pub fn choose_word_count(&mut self, preferences: &Preferences) -> io::Result<usize> {
		let default = preferences.word_count_or_default();
		loop {
			let answer = self.ask(&format!("Теперь выберите сколько хотите слов (по умолчанию - {}): ", default))?;
			match parse_word_count(&answer, default) {
				WordCount::Accepted(n) => return Ok(n),
				WordCount::TooSmall => writeln!(self.output, "\nНеобходимо ввести число от 2 и больше!")?,
				WordCount::NotANumber => writeln!(
					self.output,
					"\nВы должны ввести число или нажмите Enter для значения по умолчанию!\n"
				)?,
			}
		}
	}

	/// Returns `true` when the user asks for another round (empty answer).
	pub fn ask_restart(&mut self) -> io::Result<bool> {
		let answer = self.ask("Для нового запуска нажмите Enter или введите любой текст, чтобы закрыть программу: ")?;
		Ok(answer.is_empty())
	}

	/// Waits for Enter before the program exits on an error.
	pub fn acknowledge(&mut self) -> io::Result<()> {
		self.ask("Нажмите Enter для выхода...").map(|_| ())
	}
}
