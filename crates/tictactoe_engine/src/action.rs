//! Move values and the errors raised when a move is rejected.

use super::position::Position;
use super::types::Side;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The cell index (0-8) receiving the mark.
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.index) {
            Some(pos) => write!(f, "{} -> {}", self.side, pos.label()),
            None => write!(f, "{} -> #{}", self.side, self.index),
        }
    }
}

/// Error returned when a move cannot be applied.
///
/// The board is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
