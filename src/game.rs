//! Game state and turn orchestration.

use crate::board::{Board, Move, Piece};
use crate::players::MoveSource;
use crate::rules;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
///
/// Transitions exactly once, from `InProgress` to one of the terminal
/// states, after the turn loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Piece),
    /// Game ended in a draw.
    Draw,
}

/// Who plays against whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum GameMode {
    /// One human against the computer.
    #[strum(serialize = "player vs AI")]
    PlayerVsAi,
    /// Two humans at the same console.
    #[strum(serialize = "player vs player")]
    PlayerVsPlayer,
}

/// Owns the board and the two move sources, and applies one half-move
/// at a time. The first source plays X and moves first.
pub struct Game {
    board: Board,
    sources: [Box<dyn MoveSource>; 2],
    mode: GameMode,
    status: GameStatus,
    active: usize,
}

impl Game {
    /// Creates a new 3x3 game between the two sources.
    pub fn new(
        mode: GameMode,
        first: Box<dyn MoveSource>,
        second: Box<dyn MoveSource>,
    ) -> Self {
        Self {
            board: Board::new(3, 3),
            sources: [first, second],
            mode,
            status: GameStatus::InProgress,
            active: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Sets the terminal status. Called once by the runner after the
    /// turn loop exits.
    pub fn set_status(&mut self, status: GameStatus) {
        debug_assert_eq!(self.status, GameStatus::InProgress);
        self.status = status;
    }

    /// Name of the source whose turn it is.
    pub fn active_name(&self) -> &str {
        self.sources[self.active].name()
    }

    /// Plays one half-move: asks the active source for a move and
    /// applies it, asking again until the board accepts. This retry
    /// loop is the only place invalid input is handled; AI sources
    /// always propose a legal move on the first ask.
    ///
    /// # Errors
    ///
    /// Fails only when the source itself fails (e.g. closed input).
    #[instrument(skip(self), fields(source = %self.active_name()))]
    pub fn play_turn(&mut self) -> Result<Move> {
        loop {
            let mv = self.sources[self.active].propose(&self.board)?;
            match self.board.place(mv) {
                Ok(()) => {
                    debug!(%mv, "Move applied");
                    self.active = 1 - self.active;
                    return Ok(mv);
                }
                Err(err) => {
                    debug!(%err, "Placement rejected, asking again");
                }
            }
        }
    }

    /// Winner on the current board, if any. Recomputed fresh from the
    /// board; the board is the single source of truth.
    pub fn winner(&self) -> Option<Piece> {
        rules::check_winner(&self.board)
    }
}
