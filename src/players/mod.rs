//! Move source trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::{HumanPlayer, LineInput};

use crate::board::{Board, Move};
use anyhow::Result;

/// A source of moves: a human at the console or an AI.
pub trait MoveSource {
    /// Proposes the next move given the current board.
    ///
    /// The game loop applies the move; if the board rejects it, the
    /// same source is asked again. Human sources re-prompt on each
    /// call, AI sources always propose a legal move.
    fn propose(&mut self, board: &Board) -> Result<Move>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}
