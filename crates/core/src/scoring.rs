//! Scoring module - line points, level progression and tick speed
//!
//! Points scale linearly with both the number of lines cleared at once and
//! the current level. A level ends once the score reaches
//! `level * level_threshold`; the check runs once per clear, so a single
//! clear raises the level by at most one.

use crate::types::{
    TICK_LENGTH_COARSE_FLOOR_MS, TICK_LENGTH_COARSE_STEP_MS, TICK_LENGTH_FINE_STEP_MS,
    TICK_LENGTH_MIN_MS,
};

/// Calculate line clear points
///
/// `lines * points_per_line * level`, saturating.
pub fn calculate_line_score(lines: usize, level: u32, points_per_line: u32) -> u32 {
    (lines as u32)
        .saturating_mul(points_per_line)
        .saturating_mul(level)
}

/// Level after a clear brought the score to `score`
pub fn level_after_score(score: u32, level: u32, level_threshold: u32) -> u32 {
    if score >= level.saturating_mul(level_threshold) {
        level + 1
    } else {
        level
    }
}

/// Tick length to use after a level-up
///
/// Shrinks by 100ms until it reaches 100ms, then by 50ms down to 50ms.
pub fn tick_length_after_level_up(tick_length_ms: u32) -> u32 {
    if tick_length_ms > TICK_LENGTH_COARSE_FLOOR_MS {
        tick_length_ms
            .saturating_sub(TICK_LENGTH_COARSE_STEP_MS)
            .max(TICK_LENGTH_COARSE_FLOOR_MS)
    } else if tick_length_ms > TICK_LENGTH_MIN_MS {
        tick_length_ms
            .saturating_sub(TICK_LENGTH_FINE_STEP_MS)
            .max(TICK_LENGTH_MIN_MS)
    } else {
        tick_length_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LEVEL_THRESHOLD, POINTS_PER_LINE, TICK_LENGTH_LEVEL_ONE_MS};

    #[test]
    fn test_line_score_scales_with_lines_and_level() {
        assert_eq!(calculate_line_score(0, 1, POINTS_PER_LINE), 0);
        assert_eq!(calculate_line_score(1, 1, POINTS_PER_LINE), 10);
        assert_eq!(calculate_line_score(2, 3, POINTS_PER_LINE), 60);
        assert_eq!(calculate_line_score(4, 5, POINTS_PER_LINE), 200);
    }

    #[test]
    fn test_level_up_at_threshold() {
        assert_eq!(level_after_score(99, 1, LEVEL_THRESHOLD), 1);
        assert_eq!(level_after_score(100, 1, LEVEL_THRESHOLD), 2);
        assert_eq!(level_after_score(199, 2, LEVEL_THRESHOLD), 2);
        assert_eq!(level_after_score(200, 2, LEVEL_THRESHOLD), 3);
    }

    #[test]
    fn test_level_up_is_single_step_per_clear() {
        // 690 crosses both the level-5 and level-6 thresholds.
        assert_eq!(level_after_score(690, 5, LEVEL_THRESHOLD), 6);
    }

    #[test]
    fn test_tick_length_progression() {
        let mut tick = TICK_LENGTH_LEVEL_ONE_MS;
        let mut seen = Vec::new();
        for _ in 0..9 {
            tick = tick_length_after_level_up(tick);
            seen.push(tick);
        }
        assert_eq!(seen, vec![500, 400, 300, 200, 100, 50, 50, 50, 50]);
    }

    #[test]
    fn test_tick_length_clamps_to_floors() {
        assert_eq!(tick_length_after_level_up(150), 100);
        assert_eq!(tick_length_after_level_up(80), 50);
        assert_eq!(tick_length_after_level_up(30), 30);
    }
}
