//! Uniform-random move selection.

use super::{MoveSelector, StrategyError};
use crate::types::{Board, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Plays a uniformly random empty cell.
///
/// The random source is injected, so a seeded generator replays the same
/// choices.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a strategy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Creates a strategy with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a strategy seeded from the thread-local generator.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        debug!(seed, "Seeding random strategy");
        Self::seeded(seed)
    }
}

impl<R: Rng + Send + std::fmt::Debug> MoveSelector for RandomStrategy<R> {
    #[instrument(skip(self, board), fields(board = %board))]
    fn select_move(&mut self, board: &Board, side: Side) -> Result<usize, StrategyError> {
        let empty: Vec<usize> = board.empty_cells().collect();
        if empty.is_empty() {
            return Err(StrategyError::NoLegalMove);
        }
        let index = empty[self.rng.random_range(0..empty.len())];
        debug!(index, "Random move selected");
        Ok(index)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_cells() {
        let board: Board = "XOX _O_ X_O".parse().unwrap();
        let mut strategy = RandomStrategy::seeded(7);
        for _ in 0..200 {
            let index = strategy.select_move(&board, Side::X).unwrap();
            assert!(board.is_empty(index), "picked occupied cell {}", index);
        }
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        let mut strategy = RandomStrategy::seeded(7);
        assert_eq!(
            strategy.select_move(&board, Side::O),
            Err(StrategyError::NoLegalMove)
        );
    }

    #[test]
    fn test_same_seed_replays_same_moves() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Side::X),
                b.select_move(&board, Side::X)
            );
        }
    }

    #[test]
    fn test_roughly_uniform_on_empty_board() {
        let board = Board::new();
        let mut strategy = RandomStrategy::seeded(2024);
        let mut counts = [0u32; 9];
        for _ in 0..9000 {
            counts[strategy.select_move(&board, Side::X).unwrap()] += 1;
        }
        for (index, count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(count),
                "cell {} picked {} times",
                index,
                count
            );
        }
    }
}
