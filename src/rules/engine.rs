//! Comparison of a guess against the secret, and final game results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::Guess;

/// How a single guess relates to the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    TooLow,
    Correct,
    TooHigh,
}

impl Verdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

/// Judge a guess against the secret.
#[must_use]
pub fn judge(guess: Guess, secret: u8) -> Verdict {
    match guess.value().cmp(&secret) {
        Ordering::Less => Verdict::TooLow,
        Ordering::Equal => Verdict::Correct,
        Ordering::Greater => Verdict::TooHigh,
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The secret was found after `guesses` attempts.
    Won { guesses: u32 },
    /// Every guess was used without finding `secret`.
    Lost { secret: u8 },
}
