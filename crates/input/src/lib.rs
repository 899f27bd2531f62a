//! Terminal input module (scorekeeper-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::ScorerAction`] values in
//! scoresheet notation. One keystroke is one roll; there is no repeat
//! handling to do.

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
