//! Terminal front end for the guessing game.
//!
//! Each line read from stdin is typed into the input field and submitted
//! with Enter. `:reset` starts a new game and `:quit` exits.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use guess_engine::{Adapter, GameConfig, GameSession, Key, UiEvent, View};

/// Guess the secret number between 1 and 10 in three tries.
#[derive(Parser, Debug)]
#[command(name = "guess")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Fixed seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Print each view as a JSON line instead of text
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "guess_engine=warn")]
    log_level: String,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        match self.seed {
            Some(seed) => GameConfig::new().with_seed(seed),
            None => GameConfig::new(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut adapter = Adapter::new(GameSession::new(&cli.game_config()));
    run(&mut adapter, io::stdin().lock(), &mut io::stdout().lock(), cli.json)?;

    tracing::info!("exiting");
    Ok(())
}

/// Drive the adapter from input lines until `:quit` or end of input.
///
/// The initial view is rendered before the first line is read.
fn run(adapter: &mut Adapter, input: impl BufRead, out: &mut impl Write, json: bool) -> Result<()> {
    render(out, adapter.view(), json)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        let view = match line.trim() {
            ":quit" => break,
            ":reset" => adapter.handle(UiEvent::ResetClicked),
            text => {
                adapter.handle(UiEvent::Input(text.to_string()));
                adapter.handle(UiEvent::Key(Key::Enter))
            }
        };
        render(out, view, json)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, view: &View, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, view).context("failed to encode view")?;
        writeln!(out)?;
    } else {
        writeln!(out, "[{}] {}", view.outcome.status, view.outcome.message)?;
        writeln!(out, "Guesses left: {}", view.guesses_left)?;
        if let Some(history) = &view.history {
            writeln!(out, "{history}")?;
        }
        if !view.input_enabled {
            writeln!(out, "(type :reset for a new game)")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess_engine::{GameRng, Guess, Status};

    fn adapter_with_secret(secret: i64) -> Adapter {
        Adapter::new(GameSession::with_secret(
            Guess::new(secret).unwrap(),
            GameRng::new(5),
        ))
    }

    fn run_text(adapter: &mut Adapter, input: &str, json: bool) -> String {
        let mut out = Vec::new();
        run(adapter, input.as_bytes(), &mut out, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut adapter = adapter_with_secret(5);

        let text = run_text(&mut adapter, "7\n:reset\n:quit\n3\n", false);

        assert!(text.contains("[warning] Too high! Try again."));
        assert!(text.contains("[info] New game started!"));
        // The line after :quit is never submitted.
        assert_eq!(adapter.session().current_guesses(), 0);
        assert!(!text.contains("Your guesses: 3"));
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut adapter = adapter_with_secret(5);

        let text = run_text(&mut adapter, "2\n", false);

        assert!(text.starts_with("[info] Enter a number between 1 and 10"));
        assert!(text.contains("[warning] Too low! Try again."));
        assert!(text.contains("Guesses left: 2"));
        assert!(text.contains("Your guesses: 2"));
        assert_eq!(adapter.session().current_guesses(), 1);
    }

    #[test]
    fn test_game_over_prompts_reset() {
        let mut adapter = adapter_with_secret(5);

        let text = run_text(&mut adapter, "5\n", false);

        assert!(text.contains("[success] Congratulations! You guessed the secret number 5!"));
        assert!(text.contains("(type :reset for a new game)"));
    }

    #[test]
    fn test_json_emits_one_view_per_line() {
        let mut adapter = adapter_with_secret(5);

        let text = run_text(&mut adapter, "7\nabc\n:reset\n", true);

        let views: Vec<View> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(views.len(), 4);
        assert_eq!(views[0].guesses_left, 3);
        assert_eq!(views[1].outcome.status, Status::Warning);
        assert_eq!(views[1].history.as_deref(), Some("Your guesses: 7"));
        assert_eq!(views[2].outcome.status, Status::Error);
        assert_eq!(views[2].input, "abc");
        assert_eq!(views[3].outcome.status, Status::Info);
        assert_eq!(views[3].guesses_left, 3);
    }
}
