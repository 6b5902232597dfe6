//! Heads-up display: the score line and the arena border

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::BORDER_HALF_EXTENT;

/// Where the score text sits, just above the top-left border corner
pub const SCORE_ANCHOR: Vec2 = Vec2::new(-BORDER_HALF_EXTENT, BORDER_HALF_EXTENT + 10.0);

pub fn format_score(score: i64) -> String {
    format!("Score: {score}")
}

/// A single score line that each update overwrites
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    text: String,
    redraws: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed text
    pub fn show(&mut self, score: i64) -> &str {
        self.text = format_score(score);
        self.redraws += 1;
        &self.text
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times the text has been redrawn
    pub fn redraws(&self) -> u32 {
        self.redraws
    }
}

/// The drawn arena outline (wider than the movement clamp)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub half_extent: f32,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            half_extent: BORDER_HALF_EXTENT,
        }
    }
}

impl Border {
    pub fn side_length(&self) -> f32 {
        self.half_extent * 2.0
    }

    /// Corners in drawing order: clockwise from the top-left
    pub fn corners(&self) -> [Vec2; 4] {
        let h = self.half_extent;
        [
            Vec2::new(-h, h),
            Vec2::new(h, h),
            Vec2::new(h, -h),
            Vec2::new(-h, -h),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ARENA_LIMIT;

    #[test]
    fn test_score_board_replaces_text() {
        let mut board = ScoreBoard::new();
        assert_eq!(board.show(0), "Score: 0");
        assert_eq!(board.show(-150), "Score: -150");
        assert_eq!(board.text(), "Score: -150");
        assert_eq!(board.redraws(), 2);
    }

    #[test]
    fn test_border_is_outside_clamp() {
        let border = Border::default();
        assert_eq!(border.side_length(), 600.0);
        assert_eq!(border.corners()[0], Vec2::new(-300.0, 300.0));
        assert_eq!(border.corners()[2], Vec2::new(300.0, -300.0));
        assert!(border.half_extent > ARENA_LIMIT);
    }
}
