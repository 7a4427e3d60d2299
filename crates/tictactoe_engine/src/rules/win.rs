//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Side};

/// Winning lines as cell indices: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Side> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            cell.side()
        } else {
            None
        }
    })
}

/// Sides owning at least one complete line.
///
/// Valid play never produces both; this exists for invariant checks.
pub fn line_owners(board: &Board) -> Vec<Side> {
    let cells = board.cells();
    let mut owners = Vec::new();
    for [a, b, c] in LINES {
        let cell = cells[a];
        if cell != Cell::Empty
            && cell == cells[b]
            && cell == cells[c]
            && let Some(side) = cell.side()
            && !owners.contains(&side)
        {
            owners.push(side);
        }
    }
    owners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for side in [Side::X, Side::O] {
                let mut cells = [Cell::Empty; 9];
                for index in line {
                    cells[index] = side.mark();
                }
                assert_eq!(check_winner(&Board::from_cells(cells)), Some(side), "{:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_ O_O ___".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_line_owners_reports_both_sides() {
        let board: Board = "XXX OOO ___".parse().unwrap();
        assert_eq!(line_owners(&board), vec![Side::X, Side::O]);
    }
}
