//! Terminal bowling scorekeeper (default binary).
//!
//! This is the primary entrypoint. Rolls are entered in scoresheet notation:
//! digits or `-` for pin counts, `x` for a strike, `/` for a spare,
//! `r` restarts the match and `q` quits.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::core::Game;
use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::term::{ScoreSheet, TerminalSession};
use tui_bowling::types::{ScorerAction, PIN_COUNT};

fn main() -> Result<()> {
    let mut term = TerminalSession::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalSession) -> Result<()> {
    let sheet = ScoreSheet::default();
    let mut game = Game::new();
    let mut status = String::from("Enter rolls in scoresheet notation. r restarts, q quits.");

    loop {
        term.draw(&screen_lines(&sheet, &game, &status))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            let Some(action) = handle_key_event(key) else {
                continue;
            };

            if action == ScorerAction::Restart {
                game = Game::new();
                status = String::from("New match.");
                continue;
            }

            status = match resolve_pins(&game, action) {
                Some(pins) => match game.roll(pins) {
                    Ok(()) if game.is_ended() => {
                        format!("Match over, final score {}. r restarts, q quits.", game.score())
                    }
                    Ok(()) => format!("Frame {}.", game.current_frame_index() + 1),
                    Err(err) => format!("Rejected: {err}."),
                },
                None => String::from("No pins standing to convert into a spare."),
            };
        }
    }
}

/// Resolve a scorekeeper action into a pin count against the open frame.
///
/// `/` means "whatever was left standing", which only makes sense when the
/// open frame holds a roll that left pins up.
fn resolve_pins(game: &Game, action: ScorerAction) -> Option<u8> {
    match action {
        ScorerAction::Pins(pins) => Some(pins),
        ScorerAction::Strike => Some(PIN_COUNT),
        ScorerAction::Spare => {
            let last = game.open_frame()?.rolls().last().copied()?;
            (last < PIN_COUNT).then(|| PIN_COUNT - last)
        }
        ScorerAction::Restart => None,
    }
}

fn screen_lines(sheet: &ScoreSheet, game: &Game, status: &str) -> Vec<String> {
    let mut lines = vec![String::from("TUI BOWLING"), String::new()];
    lines.extend(sheet.render(game));
    lines.push(String::new());
    lines.push(status.to_string());
    lines
}
