//! Presentation adapter.
//!
//! Translates concrete UI events into the session calls and keeps the
//! state a front end needs to draw: the last outcome, guesses left, the
//! history line, the input field and whether it accepts input.
//!
//! ## Usage
//!
//! ```
//! use guess_engine::adapter::{Adapter, Key, UiEvent};
//! use guess_engine::core::GameSession;
//!
//! let mut adapter = Adapter::new(GameSession::with_seed(7));
//! adapter.handle(UiEvent::Input("4".into()));
//! let view = adapter.handle(UiEvent::Key(Key::Enter));
//! assert_eq!(view.guesses_left, 2);
//! ```

pub mod event;
pub mod view;

pub use event::{Key, UiEvent};
pub use view::View;

use tracing::debug;

use crate::core::{GameSession, Guess, Outcome};

/// Owns a session and the view rendered from it.
#[derive(Clone, Debug)]
pub struct Adapter {
    session: GameSession,
    view: View,
}

impl Adapter {
    /// Wrap a session, showing the welcome message.
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let view = View::initial(&session, Outcome::welcome());
        Self { session, view }
    }

    /// Apply one UI event and return the refreshed view.
    pub fn handle(&mut self, event: UiEvent) -> &View {
        match event {
            UiEvent::Input(text) => {
                if self.view.input_enabled {
                    self.view.input = text;
                }
            }
            UiEvent::Key(Key::Enter) | UiEvent::SubmitClicked => self.submit(),
            UiEvent::Key(Key::Char(c)) => {
                if self.view.input_enabled {
                    self.view.input.push(c);
                }
            }
            UiEvent::Key(Key::Backspace) => {
                if self.view.input_enabled {
                    self.view.input.pop();
                }
            }
            UiEvent::Key(Key::Other) => {}
            UiEvent::ResetClicked => self.reset(),
        }
        &self.view
    }

    fn submit(&mut self) {
        if !self.view.input_enabled {
            debug!("submit ignored, input disabled");
            return;
        }

        let guess = match Guess::parse(&self.view.input) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(%err, input = %self.view.input, "input rejected");
                self.view.outcome = Outcome::invalid_input();
                return;
            }
        };

        let outcome = self.session.submit_guess(guess);
        self.view.refresh(&self.session, outcome);
        self.view.input.clear();

        if self.session.is_over() {
            self.view.input_enabled = false;
        }
    }

    fn reset(&mut self) {
        let outcome = self.session.reset();
        self.view.refresh(&self.session, outcome);
        self.view.input.clear();
        self.view.input_enabled = true;
    }

    /// The current view.
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The wrapped session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Status};

    fn adapter_with_secret(secret: i64) -> Adapter {
        let session = GameSession::with_secret(Guess::new(secret).unwrap(), GameRng::new(1));
        Adapter::new(session)
    }

    fn type_and_enter(adapter: &mut Adapter, text: &str) -> View {
        adapter.handle(UiEvent::Input(text.to_string()));
        adapter.handle(UiEvent::Key(Key::Enter)).clone()
    }

    #[test]
    fn test_initial_view() {
        let adapter = adapter_with_secret(5);
        let view = adapter.view();

        assert_eq!(view.outcome, Outcome::welcome());
        assert_eq!(view.guesses_left, 3);
        assert_eq!(view.history, None);
        assert!(view.input_enabled);
    }

    #[test]
    fn test_enter_and_button_both_submit() {
        let mut adapter = adapter_with_secret(5);

        let view = type_and_enter(&mut adapter, "7");
        assert_eq!(view.outcome.status, Status::Warning);
        assert_eq!(view.guesses_left, 2);

        adapter.handle(UiEvent::Input("2".into()));
        let view = adapter.handle(UiEvent::SubmitClicked);
        assert_eq!(view.guesses_left, 1);
        assert_eq!(view.history.as_deref(), Some("Your guesses: 7, 2"));
        assert!(view.input.is_empty());
    }

    #[test]
    fn test_typed_characters() {
        let mut adapter = adapter_with_secret(5);

        adapter.handle(UiEvent::Key(Key::Char('1')));
        adapter.handle(UiEvent::Key(Key::Char('9')));
        adapter.handle(UiEvent::Key(Key::Backspace));
        adapter.handle(UiEvent::Key(Key::Other));
        assert_eq!(adapter.view().input, "1");

        let view = adapter.handle(UiEvent::Key(Key::Enter));
        assert_eq!(view.outcome.message, "Too low! Try again.");
    }

    #[test]
    fn test_invalid_input_leaves_session_alone() {
        let mut adapter = adapter_with_secret(5);

        let view = type_and_enter(&mut adapter, "eleven");

        assert_eq!(view.outcome, Outcome::invalid_input());
        assert_eq!(view.guesses_left, 3);
        assert_eq!(view.input, "eleven");
        assert_eq!(adapter.session().current_guesses(), 0);
    }

    #[test]
    fn test_game_over_disables_input() {
        let mut adapter = adapter_with_secret(5);

        let view = type_and_enter(&mut adapter, "5");
        assert_eq!(view.outcome.status, Status::Success);
        assert!(!view.input_enabled);

        // Further typing and submits are ignored.
        let view = type_and_enter(&mut adapter, "3");
        assert_eq!(view.outcome.status, Status::Success);
        assert!(view.input.is_empty());
        assert_eq!(adapter.session().current_guesses(), 1);
    }

    #[test]
    fn test_reset_reenables_input() {
        let mut adapter = adapter_with_secret(5);
        type_and_enter(&mut adapter, "1");
        type_and_enter(&mut adapter, "2");
        let view = type_and_enter(&mut adapter, "3");
        assert_eq!(view.outcome.status, Status::Error);
        assert!(!view.input_enabled);

        let view = adapter.handle(UiEvent::ResetClicked);

        assert_eq!(view.outcome.status, Status::Info);
        assert!(view.input_enabled);
        assert_eq!(view.guesses_left, 3);
        assert_eq!(view.history, None);
    }
}
