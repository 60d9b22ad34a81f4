//! Core game types: guesses, outcomes, RNG, configuration and the session.
//!
//! Nothing in this module performs I/O. Front ends own a
//! [`GameSession`] and render the [`Outcome`]s it returns.

pub mod config;
pub mod error;
pub mod guess;
pub mod outcome;
pub mod rng;
pub mod session;

pub use config::{secret_range, GameConfig, MAX_GUESSES, SECRET_MAX, SECRET_MIN};
pub use error::{GuessError, GuessResult};
pub use guess::Guess;
pub use outcome::{Outcome, Status};
pub use rng::GameRng;
pub use session::{GameSession, GuessHistory, Phase};
