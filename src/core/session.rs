//! The game session: secret, guess counter, history and the over flag.
//!
//! ## Lifecycle
//!
//! A session is created by its owner and mutated only through
//! [`GameSession::submit_guess`] and [`GameSession::reset`]. There is no
//! shared instance; every caller holds its own session.
//!
//! ## State machine
//!
//! ```text
//! Active --wrong guess, guesses remain--> Active
//! Active --correct guess----------------> Over
//! Active --guesses exhausted------------> Over
//! Over   --reset------------------------> Active
//! Over   --submit (rejected)------------> Over
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::config::{secret_range, GameConfig, MAX_GUESSES};
use super::guess::Guess;
use super::outcome::Outcome;
use super::rng::GameRng;
use crate::rules::{judge, GameResult, Verdict};

/// Guess history sized for a full game without spilling to the heap.
pub type GuessHistory = SmallVec<[Guess; MAX_GUESSES as usize]>;

/// Coarse session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Guesses are accepted.
    Active,
    /// The game ended; only `reset` changes anything.
    Over,
}

/// One number-guessing game.
#[derive(Clone, Debug)]
pub struct GameSession {
    secret_number: u8,
    max_guesses: u32,
    current_guesses: u32,
    guess_history: GuessHistory,
    game_over: bool,
    rng: GameRng,
}

impl GameSession {
    /// Start a session, drawing the first secret from the configured RNG.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = config.rng();
        let secret = rng.draw_secret(secret_range());
        info!(seed = rng.seed(), "new game session");
        Self::from_parts(secret, rng)
    }

    /// Start a reproducible session from a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&GameConfig::new().with_seed(seed))
    }

    /// Start a session with a known secret.
    ///
    /// Later resets draw from `rng` as usual.
    #[must_use]
    pub fn with_secret(secret: Guess, rng: GameRng) -> Self {
        Self::from_parts(secret.value(), rng)
    }

    fn from_parts(secret_number: u8, rng: GameRng) -> Self {
        Self {
            secret_number,
            max_guesses: MAX_GUESSES,
            current_guesses: 0,
            guess_history: GuessHistory::new(),
            game_over: false,
            rng,
        }
    }

    /// Submit one guess and evaluate it.
    ///
    /// Never fails: rejected submissions are reported as an error
    /// [`Outcome`] and leave the session unchanged.
    pub fn submit_guess(&mut self, guess: Guess) -> Outcome {
        if self.game_over {
            debug!(%guess, "guess rejected, game already over");
            return Outcome::already_over();
        }

        // Unreachable through the public API; kept as a backstop.
        if self.current_guesses >= self.max_guesses {
            self.game_over = true;
            debug!(%guess, "guess rejected, no guesses left");
            return Outcome::exhausted(self.secret_number);
        }

        // Counter and history always move together.
        self.current_guesses += 1;
        self.guess_history.push(guess);

        let verdict = judge(guess, self.secret_number);
        debug!(
            %guess,
            ?verdict,
            current_guesses = self.current_guesses,
            "guess recorded"
        );

        match verdict {
            Verdict::Correct => {
                self.game_over = true;
                info!(guesses = self.current_guesses, "secret found");
                Outcome::correct(self.secret_number)
            }
            _ if self.current_guesses >= self.max_guesses => {
                self.game_over = true;
                info!(secret = self.secret_number, "guesses exhausted");
                Outcome::exhausted(self.secret_number)
            }
            Verdict::TooHigh => Outcome::too_high(),
            Verdict::TooLow => Outcome::too_low(),
        }
    }

    /// Parse raw text and submit it.
    ///
    /// Invalid input yields [`Outcome::invalid_input`] without touching
    /// the session.
    pub fn submit_raw(&mut self, raw: &str) -> Outcome {
        match Guess::parse(raw) {
            Ok(guess) => self.submit_guess(guess),
            Err(err) => {
                debug!(%err, "raw input rejected");
                Outcome::invalid_input()
            }
        }
    }

    /// Start a new game with a fresh secret.
    pub fn reset(&mut self) -> Outcome {
        self.secret_number = self.rng.draw_secret(secret_range());
        self.max_guesses = MAX_GUESSES;
        self.current_guesses = 0;
        self.guess_history.clear();
        self.game_over = false;
        info!("game reset");
        Outcome::new_game()
    }

    /// Guesses left in this game.
    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.max_guesses.saturating_sub(self.current_guesses)
    }

    // === Accessors ===

    #[must_use]
    pub fn secret_number(&self) -> u8 {
        self.secret_number
    }

    #[must_use]
    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    #[must_use]
    pub fn current_guesses(&self) -> u32 {
        self.current_guesses
    }

    /// Accepted guesses in submission order.
    #[must_use]
    pub fn guess_history(&self) -> &[Guess] {
        &self.guess_history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Over
        } else {
            Phase::Active
        }
    }

    /// The RNG used for future secrets.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// How the game ended, or `None` while it is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }

        match self.guess_history.last() {
            Some(&last) if judge(last, self.secret_number).is_correct() => Some(GameResult::Won {
                guesses: self.current_guesses,
            }),
            _ => Some(GameResult::Lost {
                secret: self.secret_number,
            }),
        }
    }

    /// History line for display, e.g. `Your guesses: 7, 2`.
    ///
    /// `None` before the first accepted guess.
    #[must_use]
    pub fn history_text(&self) -> Option<String> {
        if self.guess_history.is_empty() {
            return None;
        }

        let joined = self
            .guess_history
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Your guesses: {joined}"))
    }
}
