//! Deterministic random number generation for secret draws.
//!
//! The same seed always produces the same sequence of secrets, which
//! lets tests and `--seed` runs replay a game exactly.
//!
//! ```
//! use guess_engine::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.draw_secret(1..=10), rng2.draw_secret(1..=10));
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to pick secret numbers.
///
/// Uses ChaCha8 for speed while keeping a uniform distribution.
/// The seed is retained so a game can be reported and replayed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a secret uniformly from an inclusive range.
    pub fn draw_secret(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }
}
