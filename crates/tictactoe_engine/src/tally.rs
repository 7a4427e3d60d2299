//! Score tally kept across board resets within a session.

use super::types::{GameResult, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Counts of completed games by outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl ScoreTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total completed games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Wins recorded for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::X => self.x_wins,
            Side::O => self.o_wins,
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Ties: {}",
            self.x_wins, self.o_wins, self.ties
        )
    }
}

/// Returns `tally` with the counter matching `result` incremented.
///
/// Call this once, on the move that takes a game from in-progress to
/// terminal. An in-progress result leaves the tally unchanged.
#[instrument]
pub fn record_result(tally: ScoreTally, result: GameResult) -> ScoreTally {
    let mut next = tally;
    match result {
        GameResult::Win(Side::X) => next.x_wins += 1,
        GameResult::Win(Side::O) => next.o_wins += 1,
        GameResult::Tie => next.ties += 1,
        GameResult::InProgress => {
            warn!("Ignoring in-progress result");
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let tally = ScoreTally::new();
        let tally = record_result(tally, GameResult::Win(Side::X));
        let tally = record_result(tally, GameResult::Win(Side::O));
        let tally = record_result(tally, GameResult::Tie);
        let tally = record_result(tally, GameResult::Tie);

        assert_eq!(*tally.x_wins(), 1);
        assert_eq!(*tally.o_wins(), 1);
        assert_eq!(*tally.ties(), 2);
        assert_eq!(tally.games(), 4);
        assert_eq!(tally.wins(Side::O), 1);
    }

    #[test]
    fn test_in_progress_is_ignored() {
        let tally = record_result(ScoreTally::new(), GameResult::InProgress);
        assert_eq!(tally, ScoreTally::new());
    }

    #[test]
    fn test_display() {
        let tally = record_result(ScoreTally::new(), GameResult::Tie);
        assert_eq!(tally.to_string(), "X: 0  O: 0  Ties: 1");
    }
}
