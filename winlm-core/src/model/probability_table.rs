use std::fmt;

use serde::{Deserialize, Serialize};

/// Statistics for one character observed after a given window.
///
/// `probability` and `cumulative_probability` are zero until the owning
/// table is finalized; afterwards they hold `count / total` and the
/// running sum of probabilities in table order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CharEntry {
	/// The observed next character.
	character: char,
	/// How many times this character followed the owning window.
	count: usize,
	/// `count / total`, set by `finalize`.
	probability: f64,
	/// Running sum of probabilities in table order, set by `finalize`.
	/// The last entry of a finalized table is forced to exactly 1.0.
	cumulative_probability: f64,
}

impl CharEntry {
	fn new(character: char) -> Self {
		Self { character, count: 1, probability: 0.0, cumulative_probability: 0.0 }
	}

	/// The observed next character.
	pub fn character(&self) -> char {
		self.character
	}

	/// Number of observations of this character after the owning window.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Normalized probability, zero before `finalize`.
	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Cumulative probability in table order, zero before `finalize`.
	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}
}

impl fmt::Display for CharEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {:.4} {:.4})", self.character, self.count, self.probability, self.cumulative_probability)
	}
}

/// Next-character distribution for a single window.
///
/// A `ProbabilityTable` holds one `CharEntry` per distinct character
/// observed after its window, in first-seen order. That order is
/// observable: it is the scan order used during sampling.
///
/// # Responsibilities
/// - Accumulate observation counts during training
/// - Normalize counts into probabilities and cumulative sums
/// - Sample a character from a uniform draw (inverse CDF)
///
/// # Invariants
/// - Each character appears at most once
/// - After `finalize`, probabilities sum to 1.0 (up to the forced
///   last-entry correction) and cumulative values are non-decreasing,
///   the final one being exactly 1.0
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ProbabilityTable {
	entries: Vec<CharEntry>,
}

impl ProbabilityTable {
	/// Creates a new empty table.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records one observation of `character`.
	///
	/// - If the character is already present, its count is increased.
	/// - Otherwise a new entry is appended with an initial count of 1,
	///   preserving first-seen order.
	pub fn record(&mut self, character: char) {
		match self.entries.iter_mut().find(|e| e.character == character) {
			Some(entry) => entry.count += 1,
			None => self.entries.push(CharEntry::new(character)),
		}
	}

	/// Normalizes counts into probabilities and cumulative sums.
	///
	/// Computes `probability = count / total` for every entry, then the
	/// running cumulative sum in table order. The last entry's cumulative
	/// value is forced to exactly 1.0 to absorb floating-point drift.
	///
	/// No-op on an empty table; idempotent while counts are unchanged.
	pub fn finalize(&mut self) {
		if self.entries.is_empty() {
			return;
		}

		let total: usize = self.entries.iter().map(|e| e.count).sum();
		if total == 0 {
			// Should not happen due to invariants, but kept for safety
			return;
		}

		let mut cumulative = 0.0;
		for entry in &mut self.entries {
			entry.probability = entry.count as f64 / total as f64;
			cumulative += entry.probability;
			entry.cumulative_probability = cumulative;
		}

		// Absorb rounding drift
		if let Some(last) = self.entries.last_mut() {
			last.cumulative_probability = 1.0;
		}
	}

	/// Samples a character from a uniform draw `r` in `[0.0, 1.0)`.
	///
	/// Scans entries in table order and returns the first whose
	/// cumulative probability is `>= r`. If none qualifies (floating-point
	/// edge cases only), falls back to the last entry's character.
	///
	/// Returns `None` if the table is empty.
	pub fn sample(&self, r: f64) -> Option<char> {
		for entry in &self.entries {
			if r <= entry.cumulative_probability {
				return Some(entry.character);
			}
		}

		// Fallback: should not happen on a finalized table, but kept for safety.
		self.entries.last().map(|e| e.character)
	}

	/// Whether the table has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Read-only view of the entries, in first-seen order.
	pub fn entries(&self) -> &[CharEntry] {
		&self.entries
	}
}

impl fmt::Display for ProbabilityTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", entry)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_preserves_first_seen_order() {
		let mut table = ProbabilityTable::new();
		table.record('b');
		table.record('a');
		table.record('b');
		table.record('c');

		let chars: Vec<char> = table.entries().iter().map(|e| e.character()).collect();
		assert_eq!(chars, vec!['b', 'a', 'c']);
		assert_eq!(table.entries()[0].count(), 2);
		assert_eq!(table.entries()[1].count(), 1);
	}

	#[test]
	fn finalize_normalizes_and_forces_last_cumulative() {
		let mut table = ProbabilityTable::new();
		table.record('x');
		table.record('x');
		table.record('y');
		table.finalize();

		let entries = table.entries();
		assert!((entries[0].probability() - 2.0 / 3.0).abs() < 1e-12);
		assert!((entries[1].probability() - 1.0 / 3.0).abs() < 1e-12);

		let sum: f64 = entries.iter().map(|e| e.probability()).sum();
		assert!((sum - 1.0).abs() < 1e-12);
		assert_eq!(entries.last().unwrap().cumulative_probability(), 1.0);
	}

	#[test]
	fn cumulative_is_non_decreasing() {
		let mut table = ProbabilityTable::new();
		for c in "abacabadabra".chars() {
			table.record(c);
		}
		table.finalize();

		let mut previous = 0.0;
		for entry in table.entries() {
			assert!(entry.cumulative_probability() >= previous);
			previous = entry.cumulative_probability();
		}
	}

	#[test]
	fn finalize_is_idempotent() {
		let mut table = ProbabilityTable::new();
		table.record('a');
		table.record('b');
		table.finalize();
		let first: Vec<f64> = table.entries().iter().map(|e| e.probability()).collect();
		table.finalize();
		let second: Vec<f64> = table.entries().iter().map(|e| e.probability()).collect();
		assert_eq!(first, second);
	}

	#[test]
	fn finalize_on_empty_table_is_a_no_op() {
		let mut table = ProbabilityTable::new();
		table.finalize();
		assert!(table.is_empty());
	}

	#[test]
	fn sample_walks_the_cumulative_distribution() {
		let mut table = ProbabilityTable::new();
		table.record('a');
		table.record('a');
		table.record('b');
		table.record('b');
		table.finalize();

		assert_eq!(table.sample(0.0), Some('a'));
		assert_eq!(table.sample(0.25), Some('a'));
		assert_eq!(table.sample(0.6), Some('b'));
		assert_eq!(table.sample(0.999_999), Some('b'));
	}

	#[test]
	fn sample_on_empty_table_returns_none() {
		let table = ProbabilityTable::new();
		assert_eq!(table.sample(0.5), None);
	}
}
