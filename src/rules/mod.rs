//! Guess evaluation rules.
//!
//! Pure functions with no session state:
//! - How a guess compares to the secret
//! - How a finished game is summarized

pub mod engine;

pub use engine::{judge, GameResult, Verdict};
