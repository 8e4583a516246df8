//! Scoring module - line clear table and combo payout
//!
//! Lines cleared in a tick pay from [`LINE_SCORES`]. A streak of ticks with
//! clears builds a combo counter that is paid out as `COMBO_BONUS * combo`
//! on the first tick without a clear.

use crate::types::{COMBO_BONUS, LINE_SCORES};

/// Score delta and combo transition for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points from the line clear table.
    pub line_clear_score: u32,
    /// Combo payout (non-zero only when a streak ends).
    pub combo_bonus: u32,
    pub total: u32,
    /// Combo counter after this tick.
    pub combo: u32,
}

/// Points for clearing `lines` lines at once. More than four pays the four-line value.
pub fn calculate_line_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Payout for a combo streak that just ended.
pub fn calculate_combo_bonus(combo: u32) -> u32 {
    COMBO_BONUS.saturating_mul(combo)
}

/// Score a tick that cleared `lines` lines, given the combo before the tick.
pub fn calculate_score(lines: usize, combo: u32) -> ScoreResult {
    if lines > 0 {
        let line_clear_score = calculate_line_score(lines);
        ScoreResult {
            line_clear_score,
            combo_bonus: 0,
            total: line_clear_score,
            combo: combo.saturating_add(1),
        }
    } else {
        let combo_bonus = calculate_combo_bonus(combo);
        ScoreResult {
            line_clear_score: 0,
            combo_bonus,
            total: combo_bonus,
            combo: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_table() {
        assert_eq!(calculate_line_score(0), 0);
        assert_eq!(calculate_line_score(1), 100);
        assert_eq!(calculate_line_score(2), 300);
        assert_eq!(calculate_line_score(3), 500);
        assert_eq!(calculate_line_score(4), 800);
    }

    #[test]
    fn test_more_than_four_lines_is_capped() {
        assert_eq!(calculate_line_score(5), 800);
        assert_eq!(calculate_line_score(16), 800);
    }

    #[test]
    fn test_clear_extends_combo() {
        let result = calculate_score(2, 1);
        assert_eq!(result.total, 300);
        assert_eq!(result.combo_bonus, 0);
        assert_eq!(result.combo, 2);
    }

    #[test]
    fn test_streak_end_pays_combo() {
        let result = calculate_score(0, 3);
        assert_eq!(result.total, 150);
        assert_eq!(result.combo, 0);
    }

    #[test]
    fn test_no_streak_pays_nothing() {
        assert_eq!(calculate_score(0, 0), ScoreResult::default());
    }
}
