use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

use super::probability_table::ProbabilityTable;
use super::random::{StdUnitSource, UnitSource};

/// A character-level fixed-window language model.
///
/// The `LanguageModel` stores, for every distinct window of
/// `window_length` characters seen in a corpus, the distribution of the
/// character that followed it, and samples continuation text from those
/// distributions.
///
/// # Responsibilities
/// - Build window -> next-character tables from a corpus
/// - Normalize counts into per-window probability distributions
/// - Generate text by sliding a window over the output and sampling
///
/// # Invariants
/// - `window_length` is always >= 1 and fixed at construction
/// - Every key in the index has exactly `window_length` characters
/// - After `train`, every table in the index is finalized
#[derive(Debug)]
pub struct LanguageModel {
	/// Number of characters in a lookup window
	window_length: usize, // must be >= 1

	/// Mapping from a window to its next-character distribution
	index: HashMap<String, ProbabilityTable>,

	/// Uniform random source, one draw per sampled character
	random: Box<dyn UnitSource>,
}

impl LanguageModel {
	/// Creates a model with a non-reproducible random source.
	///
	/// # Errors
	/// Returns an error if `window_length < 1`.
	pub fn new(window_length: usize) -> Result<Self, String> {
		Self::with_source(window_length, Box::new(StdUnitSource::from_entropy()))
	}

	/// Creates a model with a reproducible random source.
	///
	/// Two models built with the same seed and trained on identical
	/// corpora generate identical output for identical arguments.
	///
	/// # Errors
	/// Returns an error if `window_length < 1`.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self, String> {
		Self::with_source(window_length, Box::new(StdUnitSource::seeded(seed)))
	}

	/// Creates a model with a caller-supplied random source.
	///
	/// The source must draw uniformly over [0.0, 1.0); the sampling
	/// contract does not otherwise depend on the algorithm.
	///
	/// # Errors
	/// Returns an error if `window_length < 1`.
	pub fn with_source(window_length: usize, random: Box<dyn UnitSource>) -> Result<Self, String> {
		if window_length < 1 {
			return Err("window_length must be >= 1".to_owned());
		}
		Ok(Self { window_length, index: HashMap::new(), random })
	}

	/// Returns the window length fixed at construction.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Returns the number of distinct windows learned so far.
	pub fn window_count(&self) -> usize {
		self.index.len()
	}

	/// Returns the learned table for a window, if any.
	pub fn table(&self, window: &str) -> Option<&ProbabilityTable> {
		self.index.get(window)
	}

	/// Builds the model from an in-memory corpus.
	///
	/// All previously learned state is discarded first, so a model
	/// instance is reusable across corpora.
	///
	/// # Behavior
	/// - A corpus of `window_length` characters or fewer yields an empty
	///   model (no window is long enough to have a following character).
	/// - The corpus is linear, not circular: the final `window_length`
	///   characters do not form a window of their own.
	/// - Counts characters, not bytes (UTF-8 safe).
	pub fn train(&mut self, corpus: &str) {
		self.index.clear();

		let chars: Vec<char> = corpus.chars().collect();
		if chars.len() <= self.window_length {
			// Corpus too short, no windows to learn
			return;
		}

		// For each window position with a following character
		for i in 0..chars.len() - self.window_length {
			let window: String = chars[i..i + self.window_length].iter().collect();
			let next_char = chars[i + self.window_length];

			// Get or create the table for this window
			let table = self.index.entry(window).or_insert_with(ProbabilityTable::new);
			table.record(next_char);
		}

		for table in self.index.values_mut() {
			table.finalize();
		}
	}

	/// Builds the model from a corpus file.
	///
	/// The whole file is read before any learned state is touched, so a
	/// failed read leaves the previously trained model intact.
	///
	/// # Errors
	/// Returns the underlying error if the file cannot be read.
	pub fn train_file<P: AsRef<Path>>(&mut self, filepath: P) -> io::Result<()> {
		let corpus = crate::io::read_corpus(filepath)?;
		self.train(&corpus);
		Ok(())
	}

	/// Generates text by appending `extra_length` sampled characters to
	/// `seed_text`.
	///
	/// # Behavior
	/// - `extra_length == 0` returns `seed_text` unchanged.
	/// - A seed shorter than `window_length` characters cannot form a
	///   lookup window and is returned unchanged regardless of
	///   `extra_length`.
	/// - Otherwise the last `window_length` characters of the output so
	///   far select a table; an unknown window or an empty table stops
	///   generation early and returns what has been produced (a normal
	///   termination, not an error).
	/// - Exactly one random draw is consumed per produced character, in
	///   generation order.
	pub fn generate(&mut self, seed_text: &str, extra_length: usize) -> String {
		if extra_length == 0 {
			return seed_text.to_owned();
		}

		let mut output: Vec<char> = seed_text.chars().collect();
		if output.len() < self.window_length {
			return seed_text.to_owned();
		}

		let target_length = output.len() + extra_length;
		while output.len() < target_length {
			let window: String = output[output.len() - self.window_length..].iter().collect();

			let next_char = match self.index.get(&window) {
				Some(table) => match table.sample(self.random.next_unit()) {
					Some(c) => c,
					None => break,
				},
				None => break,
			};
			output.push(next_char);
		}

		output.into_iter().collect()
	}
}

impl fmt::Display for LanguageModel {
	/// Inspection dump: one line per learned window with its table's
	/// characters, counts, and probabilities. Window order is unspecified.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, table) in &self.index {
			writeln!(f, "{} : {}", window, table)?;
		}
		Ok(())
	}
}
