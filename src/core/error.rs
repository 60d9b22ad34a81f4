//! Errors raised when raw input is turned into a [`Guess`](super::Guess).

use thiserror::Error;

use super::config::{SECRET_MAX, SECRET_MIN};

/// Result alias for guess parsing.
pub type GuessResult<T> = Result<T, GuessError>;

/// Why a raw value was refused as a guess.
///
/// These never reach session state: a rejected value is reported back to
/// the caller and the session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The input was empty or only whitespace.
    #[error("no guess entered")]
    Empty,

    /// The input is not an integer.
    #[error("`{0}` is not a whole number")]
    NotANumber(String),

    /// The integer lies outside the secret range.
    #[error("{value} is outside the range {min}-{max}")]
    OutOfRange {
        /// The rejected value as written, which may not fit any integer type.
        value: String,
        /// Smallest accepted guess.
        min: u8,
        /// Largest accepted guess.
        max: u8,
    },
}

impl GuessError {
    /// An out-of-range error for the configured secret range.
    pub(crate) fn out_of_range(value: impl ToString) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            min: SECRET_MIN,
            max: SECRET_MAX,
        }
    }
}
