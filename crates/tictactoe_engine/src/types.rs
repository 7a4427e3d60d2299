//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Side {
    /// Side X (goes first).
    X,
    /// Side O (goes second).
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Returns the mark this side places on the board.
    pub fn mark(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the side owning this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Side::X),
            Cell::O => Some(Side::O),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        side.mark()
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Number of cells carrying `side`'s mark.
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|cell| cell.side() == Some(side)).count()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Returns a copy with `index` set to `cell`. Callers check the bounds.
    pub(crate) fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their index so the grid doubles as an input legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&index.to_string()),
                    cell => result.push(cell.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// Input did not have exactly nine cell characters.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// Input contained a character that is not a cell.
    #[display("Unexpected cell character {:?}", _0)]
    BadCell(char),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells written as `X`, `O` and `_` (or `.`), ignoring whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELL_COUNT {
            return Err(ParseBoardError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '_' | '.' => Cell::Empty,
                other => return Err(ParseBoardError::BadCell(other)),
            };
        }
        Ok(Self { cells })
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Win(Side),
    /// Board is full with no completed line.
    Tie,
}

impl GameResult {
    /// Returns true for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Win(side) => Some(*side),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(side) => write!(f, "Player {} wins", side),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_ OO_ ___".parse().unwrap();
        assert_eq!(board.get(0), Some(Cell::X));
        assert_eq!(board.get(4), Some(Cell::O));
        assert_eq!(board.get(2), Some(Cell::Empty));
        assert_eq!(board.to_string(), "XX_OO____");
    }

    #[test]
    fn test_parse_board_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::WrongLength(2)));
        assert_eq!(
            "XO?______".parse::<Board>(),
            Err(ParseBoardError::BadCell('?'))
        );
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board: Board = "X_O_X_O__".parse().unwrap();
        let empties: Vec<_> = board.empty_cells().collect();
        assert_eq!(empties, vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_display_shows_indices_for_empty_cells() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_display_full_board_uses_marks_only() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(board.display(), "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
        assert!(!board.display().contains('_'));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::X.opponent(), Side::O);
        assert_eq!(Side::O.opponent(), Side::X);
    }
}
