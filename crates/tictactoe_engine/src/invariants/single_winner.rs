//! Single winner invariant: at most one side owns a complete line.

use super::Invariant;
use crate::Game;
use crate::rules::win::line_owners;

/// Invariant: the board never has complete lines for both sides.
pub struct SingleWinnerInvariant;

impl Invariant<Game> for SingleWinnerInvariant {
    const NAME: &'static str = "At most one side owns a complete line";

    fn holds(game: &Game) -> bool {
        line_owners(game.board()).len() <= 1
    }
}
