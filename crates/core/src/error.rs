//! Roll rejection errors.
//!
//! Every failure is deterministic for a given state and input: the caller
//! must change its input or stop, never retry. A rejected roll leaves the
//! frame and match exactly as they were.

use thiserror::Error;

/// Broad classification of a rejected roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The roll value itself is unacceptable (caller bug / invalid input).
    InvalidArgument,
    /// The roll was offered to a frame or match that cannot take one
    /// (protocol violation by the caller).
    InvalidState,
}

/// Why a roll was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BowlError {
    /// A single delivery can knock down at most ten pins.
    #[error("cannot bowl more than 10 pins in a single roll (got {pins})")]
    PinsOutOfRange { pins: u8 },

    /// Two rolls against the same rack cannot exceed ten pins combined.
    #[error("cannot bowl more than 10 pins total for a frame ({first} + {pins})")]
    FrameOverflow { first: u8, pins: u8 },

    /// The frame has already taken all the rolls it is entitled to.
    #[error("frame cannot take another roll")]
    FrameComplete,

    /// All ten frames are complete.
    #[error("match has ended")]
    MatchEnded,
}

impl BowlError {
    /// Classify this error per the caller contract.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BowlError::PinsOutOfRange { .. } | BowlError::FrameOverflow { .. } => {
                ErrorKind::InvalidArgument
            }
            BowlError::FrameComplete | BowlError::MatchEnded => ErrorKind::InvalidState,
        }
    }
}
