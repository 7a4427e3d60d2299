//! Computer move selection.
//!
//! A [`MoveSelector`] looks at a board snapshot and the side to move and
//! returns a cell index. Selectors never see session state, so the same
//! board (and, for [`RandomStrategy`], the same seed) always yields the
//! same answer.

mod minimax;
mod random;

pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::types::{Board, Side};
use serde::{Deserialize, Serialize};

/// Error returned when a selector is asked to move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StrategyError {
    /// Every cell is already marked.
    #[display("No legal move: the board is full")]
    NoLegalMove,
}

impl std::error::Error for StrategyError {}

/// Picks the computer's move.
pub trait MoveSelector: Send + std::fmt::Debug {
    /// Returns the cell index `side` should play on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoLegalMove`] if `board` has no empty cell.
    fn select_move(&mut self, board: &Board, side: Side) -> Result<usize, StrategyError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Which selector the computer opponent uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StrategyKind {
    /// Uniform choice over empty cells.
    Random,
    /// Exhaustive minimax search.
    #[default]
    Minimax,
}

/// How minimax scores finished games.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Scoring {
    /// +10 for an O win, -10 for an X win, 0 for a tie, at any depth.
    #[default]
    Flat,
    /// Like `Flat`, but each ply of depth shaves one point off a win, so
    /// quicker wins and slower losses score better.
    DepthWeighted,
}

/// Builds the selector for `kind`.
///
/// `seed` fixes the random source of [`StrategyKind::Random`]; without it the
/// seed is drawn from the thread-local generator.
pub fn selector_for(kind: StrategyKind, scoring: Scoring, seed: Option<u64>) -> Box<dyn MoveSelector> {
    match kind {
        StrategyKind::Random => Box::new(match seed {
            Some(seed) => RandomStrategy::seeded(seed),
            None => RandomStrategy::from_random(),
        }),
        StrategyKind::Minimax => Box::new(MinimaxStrategy::new(scoring)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_parses_from_config_names() {
        assert_eq!("random".parse::<StrategyKind>(), Ok(StrategyKind::Random));
        assert_eq!("minimax".parse::<StrategyKind>(), Ok(StrategyKind::Minimax));
        assert_eq!(StrategyKind::Minimax.to_string(), "minimax");
        assert_eq!(
            "depth_weighted".parse::<Scoring>(),
            Ok(Scoring::DepthWeighted)
        );
    }

    #[test]
    fn test_selector_for_names() {
        assert_eq!(selector_for(StrategyKind::Random, Scoring::Flat, Some(1)).name(), "random");
        assert_eq!(selector_for(StrategyKind::Minimax, Scoring::Flat, None).name(), "minimax");
    }
}
