//! Frame module - one of the ten scoring units of a match
//!
//! A frame owns its rolls and enforces per-frame legality. Derived facts
//! (strike, spare, completion) are recomputed from the rolls on every query
//! so they always reflect the latest mutation. The final frame is flagged at
//! construction and follows the bonus-roll rules.

use arrayvec::ArrayVec;

use tui_bowling_types::{FINAL_FRAME_ROLLS_MAX, FRAME_ROLLS_MAX, PIN_COUNT};

use crate::error::BowlError;

/// One frame of a match: up to two rolls, or three in the final frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Pins knocked down per roll, in the order bowled.
    rolls: ArrayVec<u8, FINAL_FRAME_ROLLS_MAX>,
    is_final: bool,
}

impl Frame {
    /// Create an empty frame, flagged as final for frame 10's rules.
    pub fn new(is_final: bool) -> Self {
        Self {
            rolls: ArrayVec::new(),
            is_final,
        }
    }

    /// Record one roll.
    ///
    /// Validates completion state, the per-roll pin range, and the cumulative
    /// pin caps before mutating, so a rejected roll leaves the frame
    /// untouched.
    pub fn bowl(&mut self, pins: u8) -> Result<(), BowlError> {
        if !self.can_bowl_again() {
            return Err(BowlError::FrameComplete);
        }
        if pins > PIN_COUNT {
            return Err(BowlError::PinsOutOfRange { pins });
        }
        if let Some(first) = self.cap_base() {
            if first + pins > PIN_COUNT {
                return Err(BowlError::FrameOverflow { first, pins });
            }
        }
        self.rolls.push(pins);
        Ok(())
    }

    /// The earlier roll the incoming roll shares a rack with, if that pair is
    /// still capped at ten pins combined.
    ///
    /// Three cases cap the incoming roll:
    /// - non-final frame, second roll: capped against the first;
    /// - final frame, second roll after a non-strike first: capped against
    ///   the first;
    /// - final frame, third roll after strike-then-non-strike: capped against
    ///   the second (a second strike resets the rack, so no cap).
    fn cap_base(&self) -> Option<u8> {
        match (self.is_final, self.rolls.as_slice()) {
            (false, &[first]) => Some(first),
            (true, &[first]) if first < PIN_COUNT => Some(first),
            (true, &[first, second]) if first == PIN_COUNT && second < PIN_COUNT => Some(second),
            _ => None,
        }
    }

    /// Whether the frame can take another roll (the frame's state machine).
    ///
    /// Non-final frames end after two rolls, or one if it was a strike. The
    /// final frame ends after two rolls unless they held a strike or spare,
    /// which earns a bonus third roll.
    pub fn can_bowl_again(&self) -> bool {
        if self.is_final {
            if !self.is_strike() && !self.is_spare() {
                return self.rolls.len() < FRAME_ROLLS_MAX;
            }
            return self.rolls.len() < FINAL_FRAME_ROLLS_MAX;
        }
        if self.is_strike() {
            return false;
        }
        self.rolls.len() < FRAME_ROLLS_MAX
    }

    /// Whether the first roll knocked down all ten pins.
    ///
    /// False while no roll has been recorded yet.
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PIN_COUNT)
    }

    /// Whether the first two rolls together knocked down all ten pins.
    ///
    /// Strikes are excluded: a spare requires the first roll to leave pins
    /// standing. False while fewer than two rolls exist.
    pub fn is_spare(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => *first < PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// Sum of all recorded rolls (0 if none).
    pub fn pin_total(&self) -> u32 {
        self.rolls.iter().map(|&p| u32::from(p)).sum()
    }

    /// The rolls recorded so far, in the order bowled.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }
}
