use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random values in `[0.0, 1.0)`.
///
/// The model consumes exactly one draw per sampled character, in
/// generation order. Any implementation must preserve that contract:
/// state advances once per call, and values are uniform over the unit
/// interval. This is what makes seeded generation reproducible.
pub trait UnitSource: Debug {
	/// Draws the next uniform value in `[0.0, 1.0)`.
	fn next_unit(&mut self) -> f64;
}

/// Default `UnitSource` backed by `rand`'s `StdRng`.
#[derive(Debug)]
pub struct StdUnitSource {
	rng: StdRng,
}

impl StdUnitSource {
	/// Creates a reproducible source from an explicit seed.
	///
	/// Two sources built from the same seed produce identical draw
	/// sequences.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Creates a non-reproducible source seeded from the operating system.
	pub fn from_entropy() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}
}

impl UnitSource for StdUnitSource {
	fn next_unit(&mut self) -> f64 {
		self.rng.random()
	}
}
