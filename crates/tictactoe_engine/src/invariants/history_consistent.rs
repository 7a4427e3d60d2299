//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::{Board, Cell, Game, Side};

/// Invariant: replaying the move history reproduces the board and turn.
///
/// Moves alternate starting with X, each lands on an empty cell, and the side
/// to move is the one after the last move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    const NAME: &'static str = "Board and side to move match the replayed move history";

    fn holds(game: &Game) -> bool {
        let mut cells = [Cell::Empty; 9];
        let mut expected = Side::X;

        for mov in game.history() {
            if mov.side != expected || cells.get(mov.index) != Some(&Cell::Empty) {
                return false;
            }
            cells[mov.index] = mov.side.mark();
            expected = expected.opponent();
        }

        Board::from_cells(cells) == *game.board() && game.to_move() == expected
    }
}
