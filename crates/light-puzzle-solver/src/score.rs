//! Accuracy scoring for a player's attempt.
//!
//! Scores depend on the optimal total from the solver, the player's own
//! total and, when the player gives up, how many lights were left on target.

use serde::{Deserialize, Serialize};

use crate::solver::Solution;

/// Summary shown when a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub presses: u32,
    pub optimal: u32,
    /// Percentage in 0..=100
    pub accuracy: u32,
}

/// `round(scale * optimal / player)`, capped at `scale`
fn ratio(optimal: u32, player: u32, scale: u32) -> u32 {
    if player <= optimal {
        return scale;
    }
    let scaled = (scale as f64 * optimal as f64 / player as f64).round() as u32;
    scaled.min(scale)
}

/// Accuracy for a solved puzzle: 100 when the player matches the optimum,
/// falling as they use more presses.
pub fn finish_accuracy(optimal: u32, player: u32) -> u32 {
    if optimal == 0 {
        return if player == 0 { 100 } else { 0 };
    }
    ratio(optimal, player, 100)
}

/// Accuracy after giving up.
///
/// A solved board scores as if finished. An unsolved board earns at most
/// half credit, scaled by the share of lights already on target and by the
/// press ratio: `round(50 * on_target / lights * min(1, optimal / player))`.
/// Making no presses, or starting from a board that needed none, earns 0.
pub fn give_up_accuracy(optimal: u32, player: u32, on_target: usize, lights: usize) -> u32 {
    if on_target >= lights {
        return finish_accuracy(optimal, player);
    }
    if optimal == 0 || player == 0 {
        return 0;
    }
    let progress = on_target as f64 / lights as f64;
    let efficiency = (optimal as f64 / player as f64).min(1.0);
    (50.0 * progress * efficiency).round() as u32
}

/// Score a finished game against the solver's answer
pub fn score_finish(solution: &Solution, player: u32) -> Score {
    let optimal = solution.total_presses.unwrap_or(0);
    let accuracy = if solution.possible {
        finish_accuracy(optimal, player)
    } else {
        0
    };
    Score {
        presses: player,
        optimal,
        accuracy,
    }
}

/// Score a game the player gave up on with `on_target` of `lights` lights
/// showing the target color
pub fn score_give_up(
    solution: &Solution,
    player: u32,
    on_target: usize,
    lights: usize,
) -> Score {
    let optimal = solution.total_presses.unwrap_or(0);
    let accuracy = if solution.possible {
        give_up_accuracy(optimal, player, on_target, lights)
    } else {
        0
    };
    Score {
        presses: player,
        optimal,
        accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_accuracy() {
        assert_eq!(finish_accuracy(3, 3), 100);
        assert_eq!(finish_accuracy(3, 4), 75);
        assert_eq!(finish_accuracy(2, 3), 67);
        assert_eq!(finish_accuracy(3, 2), 100);
        assert_eq!(finish_accuracy(0, 0), 100);
        assert_eq!(finish_accuracy(0, 2), 0);
    }

    #[test]
    fn test_give_up_accuracy() {
        assert_eq!(give_up_accuracy(4, 5, 6, 6), 80);
        assert_eq!(give_up_accuracy(4, 5, 3, 6), 20);
        assert_eq!(give_up_accuracy(4, 4, 5, 6), 42);
        assert_eq!(give_up_accuracy(4, 0, 2, 6), 0);
        assert_eq!(give_up_accuracy(0, 3, 5, 6), 0);
    }

    #[test]
    fn test_give_up_credit_follows_progress() {
        // One stray press no longer earns the full half credit
        assert_eq!(give_up_accuracy(4, 1, 0, 6), 0);
        assert_eq!(give_up_accuracy(4, 1, 1, 6), 8);
        assert!(give_up_accuracy(4, 3, 5, 6) > give_up_accuracy(4, 1, 1, 6));
        assert!(give_up_accuracy(4, 3, 5, 6) < 50);
        // Extra presses still cost credit at equal progress
        assert!(give_up_accuracy(4, 8, 5, 6) < give_up_accuracy(4, 4, 5, 6));
    }

    #[test]
    fn test_infeasible_scores_zero() {
        let solution = Solution::impossible();
        assert_eq!(
            score_finish(&solution, 4),
            Score {
                presses: 4,
                optimal: 0,
                accuracy: 0
            }
        );
        assert_eq!(score_give_up(&solution, 4, 2, 5).accuracy, 0);
    }

    #[test]
    fn test_score_uses_solution_total() {
        let solution = Solution::found(vec![1, 2, 0]);
        assert_eq!(
            score_finish(&solution, 6),
            Score {
                presses: 6,
                optimal: 3,
                accuracy: 50
            }
        );
    }
}
