//! Exhaustive minimax move selection.

use super::{MoveSelector, Scoring, StrategyError};
use crate::rules::evaluate;
use crate::types::{Board, GameResult, Side};
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 10;

/// Optimal play by full-depth minimax.
///
/// O maximizes and X minimizes. Empty cells are tried in ascending index
/// order and only a strictly better score replaces the current choice, so
/// equal-scoring moves resolve to the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy {
    scoring: Scoring,
}

impl MinimaxStrategy {
    /// Creates a minimax strategy with the given scoring.
    pub fn new(scoring: Scoring) -> Self {
        Self { scoring }
    }

    /// Scores `board` with `to_move` about to play, `depth` plies below the root.
    fn score(&self, board: &Board, to_move: Side, depth: i32) -> i32 {
        match evaluate(board) {
            GameResult::Win(Side::O) => WIN_SCORE - self.discount(depth),
            GameResult::Win(Side::X) => self.discount(depth) - WIN_SCORE,
            GameResult::Tie => 0,
            GameResult::InProgress => {
                let mut best: Option<i32> = None;
                for index in board.empty_cells() {
                    let child = board.with_cell(index, to_move.mark());
                    let score = self.score(&child, to_move.opponent(), depth + 1);
                    if best.is_none_or(|b| improves(to_move, score, b)) {
                        best = Some(score);
                    }
                }
                best.unwrap_or(0)
            }
        }
    }

    fn discount(&self, depth: i32) -> i32 {
        match self.scoring {
            Scoring::Flat => 0,
            Scoring::DepthWeighted => depth,
        }
    }
}

/// True if `score` beats `best` for `side`.
fn improves(side: Side, score: i32, best: i32) -> bool {
    match side {
        Side::O => score > best,
        Side::X => score < best,
    }
}

impl MoveSelector for MinimaxStrategy {
    #[instrument(skip(self, board), fields(board = %board, scoring = %self.scoring))]
    fn select_move(&mut self, board: &Board, side: Side) -> Result<usize, StrategyError> {
        let mut best: Option<(usize, i32)> = None;
        for index in board.empty_cells() {
            let child = board.with_cell(index, side.mark());
            let score = self.score(&child, side.opponent(), 1);
            if best.is_none_or(|(_, b)| improves(side, score, b)) {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(StrategyError::NoLegalMove)?;
        debug!(index, score, "Minimax move selected");
        Ok(index)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
