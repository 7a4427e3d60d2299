//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from the
//! stateful [`Game`](crate::Game) so strategies can evaluate hypothetical
//! boards without touching session state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::types::{Board, GameResult};

/// Classifies a board as won, tied or still in progress.
///
/// Lines are checked rows first, then columns, then diagonals, and the
/// first complete line decides the winner.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Win(winner)
    } else if is_full(board) {
        GameResult::Tie
    } else {
        GameResult::InProgress
    }
}
