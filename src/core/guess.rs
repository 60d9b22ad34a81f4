//! Validated guess values.
//!
//! A [`Guess`] can only be built from an integer inside
//! [`SECRET_MIN`]..=[`SECRET_MAX`], so the session never sees
//! non-numeric or out-of-range input.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::{SECRET_MAX, SECRET_MIN};
use super::error::{GuessError, GuessResult};

/// A single in-range integer guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Guess(u8);

impl Guess {
    /// Create a guess from an integer, rejecting values outside the range.
    pub fn new(value: i64) -> GuessResult<Self> {
        if value < i64::from(SECRET_MIN) || value > i64::from(SECRET_MAX) {
            return Err(GuessError::out_of_range(value));
        }
        // Range check above guarantees the value fits.
        Ok(Self(value as u8))
    }

    /// Parse raw text typed by the player.
    ///
    /// Surrounding whitespace is ignored. Fractions, exponents and other
    /// non-integer spellings are refused rather than rounded.
    pub fn parse(raw: &str) -> GuessResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GuessError::Empty);
        }

        let value = trimmed.parse::<i64>().map_err(|err| match err.kind() {
            // Integers too wide for i64 are still integers, just far out of range.
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                GuessError::out_of_range(trimmed)
            }
            _ => GuessError::NotANumber(trimmed.to_string()),
        })?;

        Self::new(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for Guess {
    type Error = GuessError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Guess> for u8 {
    fn from(guess: Guess) -> Self {
        guess.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
