//! Interactive syllable dictation.
//!
//! Reads `words1.txt` .. `words4.txt` from the working directory, asks for a
//! mode and a word count, then prints the dictation list and its answer key.

mod preferences;
mod prompt;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Context;
use dictation_core::DictationError;
use dictation_core::model::answer_key::{AnswerKey, DictationListing};
use dictation_core::model::category::STARTUP_SYLLABLES;
use dictation_core::model::session::Session;
use dictation_core::model::source::WordSource;
use log::{debug, error, info};

use preferences::Preferences;
use prompt::Prompter;

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	// Ctrl+C ends the program quietly, whatever prompt is waiting.
	if let Err(err) = ctrlc::set_handler(|| {
		debug!("interrupted");
		process::exit(0);
	}) {
		error!("could not install interrupt handler: {}", err);
	}

	let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
	let source = WordSource::new(".");

	if let Err(err) = run(&mut prompter, &source) {
		process::exit(report_failure(&mut prompter, &err));
	}
}

/// Prints the diagnostic of an unhandled error, waits for Enter and returns
/// the exit code.
fn report_failure<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, err: &anyhow::Error) -> i32 {
	let out = prompter.output();
	let _ = writeln!(out, "{:?}", err);
	let _ = writeln!(out, "Произошла ошибка");
	// Input may already be closed; the exit code does not depend on it.
	if let Err(ack) = prompter.acknowledge() {
		debug!("acknowledgement not read: {}", ack);
	}
	1
}

/// Checks the word lists, then plays rounds until the user declines a restart.
fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, source: &WordSource) -> anyhow::Result<()> {
	if let Err(err) = source.check_available(&STARTUP_SYLLABLES) {
		if let DictationError::MissingWordLists(names) = &err {
			for name in names {
				writeln!(prompter.output(), "Не найден файл {} в директории с текущим файлом", name)?;
			}
		}
		return Err(err).context("startup check of word lists failed");
	}

	let mut preferences = Preferences::default();
	loop {
		preferences = play_round(prompter, source, preferences)?;
		writeln!(prompter.output())?;
		if !prompter.ask_restart()? {
			return Ok(());
		}
	}
}

/// Asks for mode and word count, prints one dictation with its answer key,
/// and returns the choices to remember for the next round.
fn play_round<R: BufRead, W: Write>(
	prompter: &mut Prompter<R, W>,
	source: &WordSource,
	preferences: Preferences,
) -> anyhow::Result<Preferences> {
	let mode = prompter.choose_mode(&preferences)?;
	writeln!(prompter.output())?;
	let word_count = prompter.choose_word_count(&preferences)?;

	info!("starting dictation: mode {}, {} words", mode, word_count);
	let session = Session::build(source, mode, word_count, &mut rand::rng())
		.with_context(|| format!("failed to build a mode {} dictation of {} words", mode, word_count))?;

	let out = prompter.output();
	writeln!(
		out,
		"\n\nСлушателю надо продиктовать слова по одному, а он должен записывать на листочек номера слов:"
	)?;
	write!(out, "{}", DictationListing(&session))?;
	writeln!(out, "\n")?;
	writeln!(out, "Что в итоге должно получиться (правильные ответы):\n")?;
	write!(out, "{}", AnswerKey::new(&session))?;
	out.flush()?;

	Ok(preferences.remember(mode, word_count))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::io::Cursor;
	use std::path::Path;

	fn source_with_lists(dir: &Path, lists: &[(u8, &str)]) -> WordSource {
		for (syllables, contents) in lists {
			fs::write(dir.join(format!("words{}.txt", syllables)), contents).unwrap();
		}
		WordSource::new(dir)
	}

	fn full_source(dir: &Path) -> WordSource {
		source_with_lists(
			dir,
			&[
				(1, "кот\nдом\nлес\nсад\n"),
				(2, "мама\nпапа\nрыба\nзима\n"),
				(3, "машина\nсобака\nкорова\n"),
				(4, "черепаха\nкукуруза\nпаутина\n"),
			],
		)
	}

	fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
		Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
	}

	fn written(prompter: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
		String::from_utf8(prompter.output().clone()).unwrap()
	}

	#[test]
	fn one_round_prints_dictation_and_answer_key() {
		let dir = tempfile::tempdir().unwrap();
		let source = full_source(dir.path());
		let mut p = prompter("2\n4\nвыход\n");

		run(&mut p, &source).unwrap();
		let out = written(&mut p);
		for n in 1..=4 {
			assert!(out.contains(&format!("#{} ", n)));
		}
		assert!(!out.contains("#5 "));
		assert!(out.contains(" 1 слог "));
		assert!(out.contains("| 2 слога"));
	}

	#[test]
	fn restart_reuses_remembered_choices() {
		let dir = tempfile::tempdir().unwrap();
		let source = full_source(dir.path());
		let mut p = prompter("3\n5\n\n\n\nстоп\n");

		run(&mut p, &source).unwrap();
		let out = written(&mut p);
		assert_eq!(out.matches("Что в итоге должно получиться").count(), 2);
		assert!(out.contains("Ваш выбор (по умолчанию 3): "));
		assert!(out.contains("(по умолчанию - 5)"));
	}

	#[test]
	fn missing_list_fails_before_any_prompt() {
		let dir = tempfile::tempdir().unwrap();
		let source = source_with_lists(dir.path(), &[(1, "кот\n"), (3, "машина\n")]);
		let mut p = prompter("2\n4\n");

		let err = run(&mut p, &source).unwrap_err();
		assert!(matches!(
			err.downcast_ref::<DictationError>(),
			Some(DictationError::MissingWordLists(names)) if names == &vec!["words2.txt".to_owned()]
		));
		let out = written(&mut p);
		assert!(out.contains("Не найден файл words2.txt"));
		assert!(!out.contains("Добро пожаловать"));
	}

	#[test]
	fn oversized_request_is_a_fatal_error() {
		let dir = tempfile::tempdir().unwrap();
		let source = full_source(dir.path());
		let mut p = prompter("4\n10\n");

		let err = run(&mut p, &source).unwrap_err();
		assert!(matches!(
			err.downcast_ref::<DictationError>(),
			Some(DictationError::InsufficientWords { syllables: 3, requested: 5, available: 3 })
		));
	}

	#[test]
	fn closed_input_is_reported_as_a_failure() {
		let dir = tempfile::tempdir().unwrap();
		let source = full_source(dir.path());
		let mut p = prompter("2\n");

		let err = run(&mut p, &source).unwrap_err();
		assert_eq!(
			err.downcast_ref::<io::Error>().map(io::Error::kind),
			Some(io::ErrorKind::UnexpectedEof)
		);

		assert_eq!(report_failure(&mut p, &err), 1);
		let out = written(&mut p);
		assert!(out.contains("input closed"));
		assert!(out.ends_with("Произошла ошибка\nНажмите Enter для выхода..."));
	}

	#[test]
	fn failure_report_prints_diagnostic_and_waits_for_enter() {
		let dir = tempfile::tempdir().unwrap();
		let source = source_with_lists(dir.path(), &[(1, "кот\n")]);
		let mut p = prompter("\n");

		let err = run(&mut p, &source).unwrap_err();
		assert_eq!(report_failure(&mut p, &err), 1);

		let out = written(&mut p);
		assert!(out.contains("startup check of word lists failed"));
		assert!(out.contains("word list not found: words2.txt, words3.txt"));
		assert!(out.contains("Произошла ошибка\n"));
		assert!(out.ends_with("Нажмите Enter для выхода..."));
	}
}
