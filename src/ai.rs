//! AI move selection: a naive scan and a win/block heuristic.
//!
//! Both strategies are stateless and recompute from the board on every
//! call. The heuristic is specific to the 3x3 board.

use crate::board::{Board, Cell, Move, Piece};
use crate::rules::win::LINES;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// AI difficulty level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
pub enum Difficulty {
    /// First empty cell in row-major order, no lookahead.
    Naive,
    /// Win if possible, block the opponent otherwise, else first empty cell.
    Heuristic,
}

/// Picks a move for `piece` using the given difficulty.
///
/// Returns `None` only on a full board; the game loop never asks for a
/// move in that situation.
#[instrument(skip(board))]
pub fn pick_move(board: &Board, piece: Piece, difficulty: Difficulty) -> Option<Move> {
    match difficulty {
        Difficulty::Naive => pick_naive(board, piece),
        Difficulty::Heuristic => pick_heuristic(board, piece),
    }
}

/// First empty cell in row-major order.
fn pick_naive(board: &Board, piece: Piece) -> Option<Move> {
    board
        .first_empty()
        .map(|(row, col)| Move::new(row, col, piece))
}

/// Three-step priority policy: win now, block the opponent, fall back
/// to the first empty cell.
fn pick_heuristic(board: &Board, piece: Piece) -> Option<Move> {
    if let Some((row, col)) = find_completing_cell(board, piece) {
        debug!(row, col, "Heuristic: taking the win");
        return Some(Move::new(row, col, piece));
    }

    if let Some((row, col)) = find_completing_cell(board, piece.opponent()) {
        debug!(row, col, "Heuristic: blocking the opponent");
        return Some(Move::new(row, col, piece));
    }

    pick_naive(board, piece)
}

/// Finds the empty cell that would complete a line for `piece`.
///
/// Scans rows top-to-bottom, then columns left-to-right, then the main
/// diagonal, then the anti-diagonal; the first line holding exactly two
/// of `piece` and one empty cell wins. The fixed order makes ties
/// deterministic.
fn find_completing_cell(board: &Board, piece: Piece) -> Option<(usize, usize)> {
    for line in LINES {
        let mut count = 0;
        let mut empty = None;
        for (row, col) in line {
            match board.get(row, col) {
                Cell::Occupied(p) if p == piece => count += 1,
                Cell::Empty => empty = Some((row, col)),
                Cell::Occupied(_) => {}
            }
        }
        if count == 2 {
            if let Some(cell) = empty {
                return Some(cell);
            }
        }
    }

    None
}
