//! Terminal score-sheet module.
//!
//! This is a small rendering layer for the scorekeeper. It renders the match
//! into plain text lines that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: `score_view` maps match state to lines with no I/O
//! - Confine terminal control (raw mode, alternate screen) to `session`

pub mod score_view;
pub mod session;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use score_view::{describe, frame_text, ScoreSheet};
pub use session::TerminalSession;
