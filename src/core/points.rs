// SoccerRank - core/points.rs
//
// Win/draw/loss points rule. Scores are compared numerically.

use crate::util::constants::{DRAW_POINTS, LOSS_POINTS, WIN_POINTS};
use std::cmp::Ordering;

/// Outcome of a game from the first-listed team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    pub fn decide(first_score: u32, second_score: u32) -> Self {
        match first_score.cmp(&second_score) {
            Ordering::Greater => Self::FirstWins,
            Ordering::Less => Self::SecondWins,
            Ordering::Equal => Self::Draw,
        }
    }

    /// Points for (first, second).
    pub fn points(self) -> (u32, u32) {
        match self {
            Self::FirstWins => (WIN_POINTS, LOSS_POINTS),
            Self::SecondWins => (LOSS_POINTS, WIN_POINTS),
            Self::Draw => (DRAW_POINTS, DRAW_POINTS),
        }
    }
}

/// Convert a score pair into a points pair: win 3, draw 1, loss 0.
pub fn award(first_score: u32, second_score: u32) -> (u32, u32) {
    Outcome::decide(first_score, second_score).points()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_team_win() {
        assert_eq!(award(4, 2), (3, 0));
    }

    #[test]
    fn test_second_team_win() {
        assert_eq!(award(0, 5), (0, 3));
    }

    #[test]
    fn test_draw() {
        assert_eq!(award(2, 2), (1, 1));
        assert_eq!(Outcome::decide(0, 0), Outcome::Draw);
    }

    #[test]
    fn test_multi_digit_scores_compare_numerically() {
        // "10" < "9" as strings; must not matter here.
        assert_eq!(award(10, 9), (3, 0));
        assert_eq!(award(9, 10), (0, 3));
    }

    #[test]
    fn test_points_total_is_three_or_two() {
        for a in 0..12 {
            for b in 0..12 {
                let (pa, pb) = award(a, b);
                let total = pa + pb;
                if a == b {
                    assert_eq!((pa, pb), (1, 1));
                } else {
                    assert_eq!(total, 3, "scores {a}-{b}");
                    assert!(pa == 0 || pb == 0);
                }
            }
        }
    }
}
