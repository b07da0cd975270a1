//! Win detection for the 3x3 board.

use crate::board::{Board, Cell, Piece};
use tracing::instrument;

/// All lines of three on a 3x3 board, as (row, col) coordinates.
///
/// Order matters for the heuristic AI's deterministic scan: rows
/// top-to-bottom, columns left-to-right, main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(piece)` if the piece has three in a line,
/// `None` otherwise. Recomputed fresh from the board each call.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Piece> {
    for [a, b, c] in LINES {
        let cell = board.get(a.0, a.1);
        if cell != Cell::Empty && cell == board.get(b.0, b.1) && cell == board.get(c.0, c.1) {
            return match cell {
                Cell::Occupied(piece) => Some(piece),
                Cell::Empty => None,
            };
        }
    }

    None
}
