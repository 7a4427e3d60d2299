//! Game engine: pure move application plus the stateful [`Game`].

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::evaluate;
use super::types::{Board, CELL_COUNT, GameResult, Side};
use tracing::{debug, error, instrument};

/// Applies `side`'s mark at `index` and returns the resulting board.
///
/// The input board is left untouched. Turn order is not checked here; the
/// caller decides whose mark goes down.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if `index` is not 0-8
/// - [`MoveError::GameOver`] if the board is already won or tied
/// - [`MoveError::CellOccupied`] if the cell holds a mark
pub fn apply_move(board: &Board, side: Side, index: usize) -> Result<Board, MoveError> {
    if index >= CELL_COUNT {
        return Err(MoveError::OutOfRange(index));
    }
    if evaluate(board).is_terminal() {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(index) {
        return Err(MoveError::CellOccupied(index));
    }
    Ok(board.with_cell(index, side.mark()))
}

/// Returns a fresh empty board.
pub fn reset_board() -> Board {
    Board::new()
}

/// Tic-tac-toe game: a board, the side to move and the move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Side,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: reset_board(),
            to_move: Side::X,
            history: Vec::new(),
        }
    }

    /// Replays cell indices from an empty board, alternating from X.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.make_move(index)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side whose mark the next move places.
    ///
    /// Meaningless once [`Game::result`] is terminal.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn result(&self) -> GameResult {
        evaluate(&self.board)
    }

    /// Places the mark of the side to move at `index`.
    ///
    /// On success the side to move flips unconditionally, including after a
    /// winning move, and the new result is returned.
    #[instrument(skip(self), fields(side = %self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<GameResult, MoveError> {
        let side = self.to_move;
        let board = apply_move(&self.board, side, index).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        self.board = board;
        self.history.push(Move::new(side, index));
        self.to_move = side.opponent();

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }

        let result = self.result();
        debug!(%result, "Move applied");
        Ok(result)
    }

    /// Clears the board and history; X moves next.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting board");
        *self = Self::new();
    }

    fn assert_invariants(&self) {
        if let Err(violations) = GameInvariants::check_all(self) {
            error!(?violations, "Game invariants violated");
            debug_assert!(false, "Game invariants violated: {:?}", violations);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
