//! Game configuration.
//!
//! The guess limit and secret range are fixed for every game; only the
//! source of randomness is configurable. Callers build a `GameConfig`
//! and hand it to [`GameSession::new`](super::GameSession::new).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of guesses allowed per game.
pub const MAX_GUESSES: u32 = 3;

/// Smallest possible secret number.
pub const SECRET_MIN: u8 = 1;

/// Largest possible secret number.
pub const SECRET_MAX: u8 = 10;

/// Inclusive range secrets are drawn from.
#[must_use]
pub const fn secret_range() -> RangeInclusive<u8> {
    SECRET_MIN..=SECRET_MAX
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` draws a seed from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_range() {
        assert_eq!(secret_range(), 1..=10);
        assert_eq!(MAX_GUESSES, 3);
    }

    #[test]
    fn test_seeded_config() {
        let config = GameConfig::new().with_seed(99);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.rng().seed(), 99);
    }

    #[test]
    fn test_default_has_no_seed() {
        assert_eq!(GameConfig::default().seed, None);
    }
}
