//! Scoring module - strike/spare lookahead over the frame sequence
//!
//! Contributions are computed as pure functions over the immutable roll
//! sequences, never cached per frame. A frame's score can depend on the next
//! frame and occasionally the one after, so keeping this pull-based makes the
//! total idempotent and side-effect free.

use crate::frame::Frame;

/// Lookahead-adjusted contribution of the frame at `idx`.
///
/// Base pins, plus for a spare the first roll of the next frame, or for a
/// strike the next two rolls bowled after it (which may span two frames when
/// the next frame was itself a strike). Bonus rolls that have not been
/// bowled yet contribute nothing: mid-match the result under-reports, it
/// never fails. The final frame has no next frame and sums at face value.
pub fn frame_contribution(frames: &[Frame], idx: usize) -> u32 {
    let Some(frame) = frames.get(idx) else {
        return 0;
    };
    let base = frame.pin_total();

    let is_strike = frame.is_strike();
    if !is_strike && !frame.is_spare() {
        return base;
    }
    let Some(next) = frames.get(idx + 1) else {
        return base;
    };
    let Some(&bonus) = next.rolls().first() else {
        return base;
    };
    let mut score = base + u32::from(bonus);
    if !is_strike {
        // A spare borrows exactly one roll.
        return score;
    }
    if let Some(&second) = next.rolls().get(1) {
        score += u32::from(second);
    } else if next.is_strike() {
        // The next frame closed on a single strike; the second bonus roll
        // lives one frame further, once it has been bowled.
        if let Some(&second) = frames.get(idx + 2).and_then(|f| f.rolls().first()) {
            score += u32::from(second);
        }
    }
    score
}

/// Total match score: the sum of every existing frame's contribution,
/// including the in-progress one.
pub fn total_score(frames: &[Frame]) -> u32 {
    (0..frames.len())
        .map(|idx| frame_contribution(frames, idx))
        .sum()
}

/// Whether the contribution of the frame at `idx` is final.
///
/// A frame settles once it is complete and every bonus roll it borrows has
/// been bowled. Open frames, and strikes or spares still waiting on future
/// rolls, are unsettled: their contribution can still grow. The score sheet
/// uses this to leave totals blank the way a paper sheet would.
pub fn contribution_settled(frames: &[Frame], idx: usize) -> bool {
    let Some(frame) = frames.get(idx) else {
        return false;
    };
    if frame.can_bowl_again() {
        return false;
    }
    if frame.is_final() || (!frame.is_strike() && !frame.is_spare()) {
        return true;
    }
    let Some(next) = frames.get(idx + 1) else {
        return false;
    };
    if !frame.is_strike() {
        return !next.rolls().is_empty();
    }
    if next.rolls().len() >= 2 {
        return true;
    }
    // Lone strike in the next frame: the second bonus roll lives one frame
    // further.
    next.is_strike()
        && frames
            .get(idx + 2)
            .map_or(false, |f| !f.rolls().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rolls: &[u8], is_final: bool) -> Frame {
        let mut f = Frame::new(is_final);
        for &pins in rolls {
            f.bowl(pins).unwrap();
        }
        f
    }

    #[test]
    fn test_open_frame_counts_face_value() {
        let frames = [frame(&[3, 4], false)];
        assert_eq!(frame_contribution(&frames, 0), 7);
        assert_eq!(total_score(&frames), 7);
    }

    #[test]
    fn test_spare_borrows_one_roll() {
        let frames = [frame(&[4, 6], false), frame(&[5, 0], false)];
        assert_eq!(frame_contribution(&frames, 0), 15);
        assert_eq!(total_score(&frames), 20);
    }

    #[test]
    fn test_strike_borrows_two_rolls() {
        let frames = [frame(&[10], false), frame(&[5, 4], false)];
        assert_eq!(frame_contribution(&frames, 0), 19);
        assert_eq!(total_score(&frames), 28);
    }

    #[test]
    fn test_spare_bonus_pending_without_next_roll() {
        let frames = [frame(&[4, 6], false), frame(&[], false)];
        assert_eq!(frame_contribution(&frames, 0), 10);
    }

    #[test]
    fn test_strike_bonus_partial_with_one_next_roll() {
        let frames = [frame(&[10], false), frame(&[7], false)];
        assert_eq!(frame_contribution(&frames, 0), 17);
        assert_eq!(total_score(&frames), 24);
    }

    #[test]
    fn test_double_strike_reaches_two_frames_ahead() {
        let frames = [
            frame(&[10], false),
            frame(&[10], false),
            frame(&[4, 2], false),
        ];
        assert_eq!(frame_contribution(&frames, 0), 24);
        assert_eq!(frame_contribution(&frames, 1), 16);
        assert_eq!(total_score(&frames), 46);
    }

    #[test]
    fn test_double_strike_second_bonus_pending() {
        // Two strikes with no third frame yet: the first strike's second
        // bonus roll is unresolved, only base plus the known roll counts.
        let frames = [frame(&[10], false), frame(&[10], false)];
        assert_eq!(frame_contribution(&frames, 0), 20);
        assert_eq!(frame_contribution(&frames, 1), 10);
        assert_eq!(total_score(&frames), 30);
    }

    #[test]
    fn test_final_frame_sums_at_face_value() {
        let frames = [frame(&[10, 10, 10], true)];
        assert_eq!(frame_contribution(&frames, 0), 30);
    }

    #[test]
    fn test_strike_into_final_frame_borrows_both_rolls() {
        let frames = [frame(&[10], false), frame(&[10, 10, 10], true)];
        assert_eq!(frame_contribution(&frames, 0), 30);
        assert_eq!(total_score(&frames), 60);
    }

    #[test]
    fn test_out_of_range_index_contributes_nothing() {
        let frames = [frame(&[3, 4], false)];
        assert_eq!(frame_contribution(&frames, 5), 0);
    }

    #[test]
    fn test_open_frame_is_unsettled() {
        let frames = [frame(&[4], false)];
        assert!(!contribution_settled(&frames, 0));
    }

    #[test]
    fn test_plain_frame_settles_when_complete() {
        let frames = [frame(&[3, 4], false)];
        assert!(contribution_settled(&frames, 0));
    }

    #[test]
    fn test_spare_settles_with_next_roll() {
        let pending = [frame(&[4, 6], false), frame(&[], false)];
        assert!(!contribution_settled(&pending, 0));
        let resolved = [frame(&[4, 6], false), frame(&[5], false)];
        assert!(contribution_settled(&resolved, 0));
    }

    #[test]
    fn test_strike_needs_two_next_rolls_to_settle() {
        let pending = [frame(&[10], false), frame(&[7], false)];
        assert!(!contribution_settled(&pending, 0));
        let resolved = [frame(&[10], false), frame(&[7, 2], false)];
        assert!(contribution_settled(&resolved, 0));
    }

    #[test]
    fn test_double_strike_settles_two_frames_ahead() {
        let pending = [frame(&[10], false), frame(&[10], false)];
        assert!(!contribution_settled(&pending, 0));
        let resolved = [
            frame(&[10], false),
            frame(&[10], false),
            frame(&[4], false),
        ];
        assert!(contribution_settled(&resolved, 0));
    }

    #[test]
    fn test_final_frame_settles_when_complete() {
        let pending = [frame(&[10, 10], true)];
        assert!(!contribution_settled(&pending, 0));
        let resolved = [frame(&[10, 10, 10], true)];
        assert!(contribution_settled(&resolved, 0));
    }

    #[test]
    fn test_strike_into_final_frame_settles_on_its_second_roll() {
        let pending = [frame(&[10], false), frame(&[10], true)];
        assert!(!contribution_settled(&pending, 0));
        let resolved = [frame(&[10], false), frame(&[10, 10], true)];
        assert!(contribution_settled(&resolved, 0));
    }
}
