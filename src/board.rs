//! Core domain types: pieces, cells, the board, and moves.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Piece {
    /// Piece X (moves first).
    X,
    /// Piece O (moves second).
    O,
}

impl Piece {
    /// Returns the opposing piece.
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell occupied by a piece.
    Occupied(Piece),
}

/// A placement request: a piece at a (row, column) coordinate.
///
/// Moves are constructed fresh each turn and not retained after
/// application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
    piece: Piece,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize, piece: Piece) -> Self {
        Self { row, col, piece }
    }

    /// Returns the target row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the target column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the piece being placed.
    pub fn piece(&self) -> Piece {
        self.piece
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.piece, self.row, self.col)
    }
}

/// Error returned when a placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The target coordinate is outside the board.
    #[display("({}, {}) is outside the board", _0, _1)]
    OutOfBounds(usize, usize),

    /// The target cell is already occupied.
    #[display("({}, {}) is already occupied", _0, _1)]
    Occupied(usize, usize),
}

impl std::error::Error for PlaceError {}

/// A rows × cols grid of cells, row-major.
///
/// The board is the single source of truth for game progress. Cells
/// transition from `Empty` to `Occupied` exactly once; [`Board::place`]
/// is the only mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at (row, col). Callers guarantee bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Checks if the cell at (row, col) is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Applies a move, occupying the target cell.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] if the coordinate is outside
    /// the board, or [`PlaceError::Occupied`] if the cell already holds
    /// a piece. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, mv: Move) -> Result<(), PlaceError> {
        let (row, col) = (mv.row(), mv.col());
        if row >= self.rows || col >= self.cols {
            return Err(PlaceError::OutOfBounds(row, col));
        }
        if !self.is_empty(row, col) {
            return Err(PlaceError::Occupied(row, col));
        }
        self.cells[row * self.cols + col] = Cell::Occupied(mv.piece());
        Ok(())
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|c| *c == Cell::Empty)
            .map(|idx| (idx / self.cols, idx % self.cols))
    }
}
