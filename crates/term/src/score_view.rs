//! ScoreSheet: maps `core::Game` into printable score-sheet lines.
//!
//! This module is pure (no I/O). It can be unit-tested. Nothing here is
//! authoritative: the sheet reads the match state, it never changes it.

use crate::core::{contribution_settled, frame_contribution, Frame, Game};
use crate::types::{FRAME_COUNT, PIN_COUNT};

/// Print-friendly text for one frame's rolls.
///
/// `"X"` for a strike, `"<first>,\"` for a spare, otherwise the roll values
/// comma-joined, with a trailing separator while the frame can still be
/// bowled.
pub fn frame_text(frame: &Frame) -> String {
    if frame.rolls().is_empty() {
        return String::new();
    }
    if frame.is_strike() {
        return "X".to_string();
    }
    if frame.is_spare() {
        let first = frame.rolls().first().copied().unwrap_or(0);
        return format!("{first},\\");
    }
    let values = frame
        .rolls()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",");
    if frame.can_bowl_again() {
        format!("{values}, ")
    } else {
        values
    }
}

/// One-line description of the whole match: bracketed frame texts plus the
/// running total. Debugging/display only.
pub fn describe(game: &Game) -> String {
    let frames = game
        .frames()
        .iter()
        .map(|f| format!("[{}]", frame_text(f)))
        .collect::<String>();
    format!("{frames} = {}", game.score())
}

/// Scoresheet marks for one frame's rolls: `X` for ten pins, `/` for the
/// roll that completes a spare, `-` for a gutter ball, digits otherwise.
fn roll_marks(frame: &Frame) -> String {
    let rolls = frame.rolls();
    let mut marks = Vec::with_capacity(rolls.len());
    for (i, &pins) in rolls.iter().enumerate() {
        let completes_spare =
            i > 0 && rolls[i - 1] < PIN_COUNT && rolls[i - 1] + pins == PIN_COUNT;
        let mark = if completes_spare {
            "/".to_string()
        } else if pins == PIN_COUNT {
            "X".to_string()
        } else if pins == 0 {
            "-".to_string()
        } else {
            pins.to_string()
        };
        marks.push(mark);
    }
    marks.join(" ")
}

/// A fixed-width score sheet over the ten frame columns.
///
/// Three rows: frame numbers, roll marks, cumulative totals. Frames that do
/// not exist yet render as blank cells, so the sheet keeps its shape for the
/// whole match. Totals stay blank from the first frame whose bonus rolls are
/// still pending, the way a paper sheet is kept.
pub struct ScoreSheet {
    /// Cell width in characters for frames 1-9.
    cell_w: usize,
    /// Cell width for the three-roll tenth frame.
    final_cell_w: usize,
}

impl Default for ScoreSheet {
    fn default() -> Self {
        // "X X X" needs seven columns with padding; two-roll frames need five.
        Self {
            cell_w: 5,
            final_cell_w: 7,
        }
    }
}

impl ScoreSheet {
    pub fn new(cell_w: usize, final_cell_w: usize) -> Self {
        Self {
            cell_w,
            final_cell_w,
        }
    }

    /// Render the match into the three sheet rows.
    pub fn render(&self, game: &Game) -> Vec<String> {
        let frames = game.frames();

        let mut header = String::from("Frame |");
        let mut marks = String::from("Rolls |");
        let mut totals = String::from("Score |");

        let mut running = 0u32;
        let mut settled = true;
        for idx in 0..FRAME_COUNT {
            let w = if idx == FRAME_COUNT - 1 {
                self.final_cell_w
            } else {
                self.cell_w
            };

            header.push_str(&format!("{:^w$}|", idx + 1));

            match frames.get(idx) {
                Some(frame) => {
                    running += frame_contribution(frames, idx);
                    settled = settled && contribution_settled(frames, idx);
                    marks.push_str(&format!("{:^w$}|", roll_marks(frame)));
                    if settled {
                        totals.push_str(&format!("{running:^w$}|"));
                    } else {
                        totals.push_str(&format!("{:^w$}|", ""));
                    }
                }
                None => {
                    marks.push_str(&format!("{:^w$}|", ""));
                    totals.push_str(&format!("{:^w$}|", ""));
                }
            }
        }

        vec![header, marks, totals]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(rolls: &[u8]) -> Game {
        let mut game = Game::new();
        for &pins in rolls {
            game.roll(pins).unwrap();
        }
        game
    }

    #[test]
    fn test_frame_text_strike() {
        let game = game_with(&[10]);
        assert_eq!(frame_text(&game.frames()[0]), "X");
    }

    #[test]
    fn test_frame_text_spare() {
        let game = game_with(&[4, 6]);
        assert_eq!(frame_text(&game.frames()[0]), "4,\\");
    }

    #[test]
    fn test_frame_text_open_frame_has_trailing_separator() {
        let game = game_with(&[4]);
        assert_eq!(frame_text(&game.frames()[0]), "4, ");
    }

    #[test]
    fn test_frame_text_closed_frame() {
        let game = game_with(&[4, 5]);
        assert_eq!(frame_text(&game.frames()[0]), "4,5");
    }

    #[test]
    fn test_describe_carries_running_total() {
        let game = game_with(&[10, 5, 4]);
        assert_eq!(describe(&game), "[X][5,4][] = 28");
    }

    #[test]
    fn test_roll_marks_notation() {
        let game = game_with(&[0, 10, 10, 7, 3, 5, 2]);
        let frames = game.frames();
        assert_eq!(roll_marks(&frames[0]), "- /");
        assert_eq!(roll_marks(&frames[1]), "X");
        assert_eq!(roll_marks(&frames[2]), "7 /");
        assert_eq!(roll_marks(&frames[3]), "5 2");
    }

    #[test]
    fn test_sheet_keeps_ten_columns() {
        let sheet = ScoreSheet::default();
        let lines = sheet.render(&game_with(&[4, 5]));
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.matches('|').count(), 11);
        }
        // All three rows align.
        assert_eq!(lines[0].len(), lines[1].len());
        assert_eq!(lines[0].len(), lines[2].len());
    }

    #[test]
    fn test_sheet_totals_accumulate() {
        let sheet = ScoreSheet::default();
        let lines = sheet.render(&game_with(&[4, 6, 5, 0]));
        // Spare frame resolves to 15, then 5 more.
        assert!(lines[2].contains("15"));
        assert!(lines[2].contains("20"));
    }

    #[test]
    fn test_sheet_total_blank_while_strike_unresolved() {
        let sheet = ScoreSheet::default();
        let lines = sheet.render(&game_with(&[10]));
        // No total can be pencilled in until the strike's bonus rolls land.
        assert!(!lines[2].chars().any(|c| c.is_ascii_digit()));

        let lines = sheet.render(&game_with(&[10, 3, 4]));
        assert!(lines[2].contains("17"));
        assert!(lines[2].contains("24"));
    }

    #[test]
    fn test_sheet_perfect_game() {
        let mut game = Game::new();
        for _ in 0..12 {
            game.roll(10).unwrap();
        }
        let lines = ScoreSheet::default().render(&game);
        assert!(lines[1].contains("X X X"));
        assert!(lines[2].contains("300"));
    }
}
