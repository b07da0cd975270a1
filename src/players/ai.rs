//! AI move source.

use super::MoveSource;
use crate::ai::{self, Difficulty};
use crate::board::{Board, Move, Piece};
use anyhow::Result;
use tracing::debug;

/// Computer player. Stateless: recomputes its move from the board on
/// every turn.
pub struct AiPlayer {
    name: String,
    piece: Piece,
    difficulty: Difficulty,
}

impl AiPlayer {
    /// Creates a new AI player.
    pub fn new(piece: Piece, difficulty: Difficulty) -> Self {
        Self {
            name: format!("Computer ({difficulty})"),
            piece,
            difficulty,
        }
    }

    /// Returns the AI's assigned piece.
    pub fn piece(&self) -> Piece {
        self.piece
    }
}

impl MoveSource for AiPlayer {
    fn propose(&mut self, board: &Board) -> Result<Move> {
        let mv = ai::pick_move(board, self.piece, self.difficulty)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(ai = %self.name, %mv, "AI chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
