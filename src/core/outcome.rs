//! Results of session operations.
//!
//! An [`Outcome`] is the only value that crosses from the session to the
//! presentation layer: a status tag and a message ready for display.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{SECRET_MAX, SECRET_MIN};

/// Status tag attached to every outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The secret was found.
    Success,
    /// A wrong guess with guesses remaining.
    Warning,
    /// A terminal or rejected action. Recoverable via reset.
    Error,
    /// Informational, e.g. a new game started.
    Info,
}

impl Status {
    /// Lowercase name, as used for styling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Warning => "warning",
            Status::Error => "error",
            Status::Info => "info",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status plus a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub message: String,
    pub status: Status,
}

impl Outcome {
    /// Create an outcome with an explicit status.
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// A `Success` outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Status::Success, message)
    }

    /// A `Warning` outcome.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Status::Warning, message)
    }

    /// An `Error` outcome.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Status::Error, message)
    }

    /// An `Info` outcome.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Status::Info, message)
    }

    // === Canned outcomes ===

    pub(crate) fn already_over() -> Self {
        Self::error("Game is over! Please start a new game.")
    }

    pub(crate) fn exhausted(secret: u8) -> Self {
        Self::error(format!("No more guesses left! The secret number was {secret}."))
    }

    pub(crate) fn correct(secret: u8) -> Self {
        Self::success(format!(
            "Congratulations! You guessed the secret number {secret}!"
        ))
    }

    pub(crate) fn too_high() -> Self {
        Self::warning("Too high! Try again.")
    }

    pub(crate) fn too_low() -> Self {
        Self::warning("Too low! Try again.")
    }

    pub(crate) fn new_game() -> Self {
        Self::info(format!(
            "New game started! I'm thinking of a new number between {SECRET_MIN} and {SECRET_MAX}."
        ))
    }

    /// Shown before the first guess of a fresh program.
    #[must_use]
    pub fn welcome() -> Self {
        Self::info(format!(
            "Enter a number between {SECRET_MIN} and {SECRET_MAX} and click 'Guess!'"
        ))
    }

    /// Reported when raw input fails validation.
    #[must_use]
    pub fn invalid_input() -> Self {
        Self::error(format!(
            "Please enter a valid number between {SECRET_MIN} and {SECRET_MAX}."
        ))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
