//! Key mapping from terminal events to scorekeeper actions.

use crate::types::ScorerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to scorekeeper actions.
///
/// Rolls use scoresheet notation: digits for pin counts, `-` for a gutter
/// ball, `x` for a strike, `/` for a spare.
pub fn handle_key_event(key: KeyEvent) -> Option<ScorerAction> {
    match key.code {
        KeyCode::Char(c) => ScorerAction::from_char(c),
        _ => None,
    }
}

/// Check if key should quit the scorekeeper.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
