//! Render state produced by the adapter.

use serde::{Deserialize, Serialize};

use crate::core::{GameSession, Outcome};

/// Everything a front end draws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// Last outcome shown to the player.
    pub outcome: Outcome,
    pub guesses_left: u32,
    /// `Your guesses: ...` line, absent before the first guess.
    pub history: Option<String>,
    /// Current contents of the input field.
    pub input: String,
    /// Whether the input field and submit control accept input.
    pub input_enabled: bool,
}

impl View {
    pub(crate) fn initial(session: &GameSession, outcome: Outcome) -> Self {
        Self {
            outcome,
            guesses_left: session.remaining_guesses(),
            history: session.history_text(),
            input: String::new(),
            input_enabled: !session.is_over(),
        }
    }

    /// Pull the counter and history from the session after a core call.
    pub(crate) fn refresh(&mut self, session: &GameSession, outcome: Outcome) {
        self.outcome = outcome;
        self.guesses_left = session.remaining_guesses();
        self.history = session.history_text();
    }
}
