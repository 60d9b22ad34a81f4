//! # guess-engine
//!
//! A number-guessing game: a secret between 1 and 10, three guesses,
//! and feedback after each one.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: There is no global game. Each front end
//!    constructs and owns its [`GameSession`].
//!
//! 2. **Validated at the Boundary**: Raw input becomes a [`Guess`] before
//!    the session sees it, so session state cannot be corrupted by bad
//!    input.
//!
//! 3. **Total Operations**: Every session operation returns an
//!    [`Outcome`]. Nothing panics or returns an error.
//!
//! ## Modules
//!
//! - `core`: Guesses, outcomes, RNG, configuration, the session
//! - `rules`: Guess evaluation and game results
//! - `adapter`: UI event translation and render state

pub mod adapter;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameSession, Guess, GuessError, Outcome, Phase, Status,
    MAX_GUESSES, SECRET_MAX, SECRET_MIN,
};

pub use crate::rules::{judge, GameResult, Verdict};

pub use crate::adapter::{Adapter, Key, UiEvent, View};
