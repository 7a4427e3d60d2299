//! Mark balance invariant: X is never behind O and never more than one ahead.

use super::Invariant;
use crate::{Game, Side};

/// Invariant: X count minus O count is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    const NAME: &'static str = "X has the same number of marks as O, or one more";

    fn holds(game: &Game) -> bool {
        let x = game.board().count(Side::X);
        let o = game.board().count(Side::O);
        x == o || x == o + 1
    }
}
