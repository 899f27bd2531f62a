//! Game module - sequences the ten frames of a match
//!
//! Routes each incoming roll to the open frame, advances frames as they
//! complete, and answers the running score with strike/spare lookahead.
//! Frames are created lazily one at a time, so "does the next frame exist
//! yet" is a plain length check for the scoring lookahead.

use arrayvec::ArrayVec;

use tui_bowling_types::{FINAL_FRAME_INDEX, FRAME_COUNT};

use crate::error::BowlError;
use crate::frame::Frame;
use crate::scoring::total_score;

/// A single ten-frame match.
///
/// At most one frame is open at a time. Once the tenth frame completes the
/// match is ended, a terminal state in which every further roll is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: ArrayVec<Frame, FRAME_COUNT>,
    ended: bool,
}

impl Game {
    /// Create a fresh match with frame 1 open, nothing bowled, score zero.
    pub fn new() -> Self {
        let mut frames = ArrayVec::new();
        frames.push(Frame::new(false));
        Self {
            frames,
            ended: false,
        }
    }

    /// Record one roll against the open frame.
    ///
    /// Frame-level rejections propagate untouched and nothing advances, so a
    /// failed call leaves the match exactly as it was. A successful roll
    /// that completes the open frame either opens the next frame or, after
    /// the tenth, ends the match.
    pub fn roll(&mut self, pins: u8) -> Result<(), BowlError> {
        if self.ended {
            return Err(BowlError::MatchEnded);
        }
        let Some(open) = self.frames.last_mut() else {
            return Err(BowlError::MatchEnded);
        };
        open.bowl(pins)?;

        if !open.can_bowl_again() {
            if self.frames.len() == FRAME_COUNT {
                self.ended = true;
            } else {
                let is_final = self.frames.len() == FINAL_FRAME_INDEX;
                self.frames.push(Frame::new(is_final));
            }
        }
        Ok(())
    }

    /// Running total under the lookahead rules.
    ///
    /// Pull-based and side-effect free. Bonuses whose rolls have not been
    /// bowled yet are simply not counted, so the result never decreases as
    /// rolls are added and is the final score once the match ends.
    pub fn score(&self) -> u32 {
        total_score(&self.frames)
    }

    /// Whether the tenth frame has completed.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Index of the frame currently accepting rolls (0-based).
    ///
    /// Stays at the final frame once the match has ended.
    pub fn current_frame_index(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Frames created so far, in order, including the open one.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The frame currently accepting rolls, while the match is running.
    pub fn open_frame(&self) -> Option<&Frame> {
        if self.ended {
            return None;
        }
        self.frames.last()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
