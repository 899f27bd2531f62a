//! Core match logic module - pure, deterministic, and testable
//!
//! This module contains all the bowling rules, state management, and scoring
//! logic. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same roll sequence always produces the same state
//! - **Testable**: comprehensive unit tests for all legality and scoring rules
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`frame`]: one scoring unit with per-frame legality and derived facts
//! - [`game`]: the ten-frame match with roll routing and frame advancement
//! - [`scoring`]: pull-based lookahead score over the frame sequence
//! - [`error`]: typed roll rejections with the caller contract
//!
//! # Match Rules
//!
//! This implementation follows standard ten-pin scoring:
//!
//! - **Frames**: ten per match; up to two rolls each, three in the tenth
//!   under bonus conditions
//! - **Strike**: first roll takes all ten pins and ends the frame; scores
//!   ten plus the next two rolls bowled
//! - **Spare**: two rolls take all ten pins; scores ten plus the next roll
//! - **Tenth frame**: a strike or spare earns a bonus third roll; its rolls
//!   count at face value
//! - **Running score**: always defined mid-match, bonuses not yet resolvable
//!   are simply not counted yet
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::Game;
//!
//! let mut game = Game::new();
//! game.roll(10).unwrap(); // strike
//! game.roll(5).unwrap();
//! game.roll(4).unwrap();
//!
//! // Strike frame scores 10 + 5 + 4, the open frame 5 + 4.
//! assert_eq!(game.score(), 28);
//! assert!(!game.is_ended());
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use error::{BowlError, ErrorKind};
pub use frame::Frame;
pub use game::Game;
pub use scoring::{contribution_settled, frame_contribution, total_score};
