//! Console runner: drives the turn loop, renders the board, and
//! reports the result.

use crate::board::{Board, Cell, Piece};
use crate::game::{Game, GameStatus};
use crate::rules;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{info, instrument};

/// Drives a [`Game`] to completion on a console, writing the board
/// after every half-move to the injected writer.
pub struct ConsoleRunner<W> {
    game: Game,
    output: W,
}

impl<W: Write> ConsoleRunner<W> {
    /// Creates a runner for the given game.
    pub fn new(game: Game, output: W) -> Self {
        Self { game, output }
    }

    /// Runs the turn loop until the board fills or a winner appears,
    /// then resolves the terminal status.
    ///
    /// The win check runs at the top of each iteration, so a winning
    /// move is applied and rendered before the loop exits.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<()> {
        info!(mode = %self.game.mode(), "Starting game");

        loop {
            // One winner scan per iteration covers both the exit test
            // and the status resolution.
            let winner = self.game.winner();
            if winner.is_some() || rules::is_full(self.game.board()) {
                self.render_board()?;
                let status = match winner {
                    Some(piece) => GameStatus::Won(piece),
                    None => GameStatus::Draw,
                };
                info!(?status, "Game over");
                self.game.set_status(status);
                return Ok(());
            }

            self.render_board()?;
            self.game.play_turn()?;
        }
    }

    /// Prints the final result line.
    pub fn print_result(&mut self) -> Result<()> {
        let line = match self.game.status() {
            GameStatus::Won(Piece::X) => "X won!",
            GameStatus::Won(Piece::O) => "O won!",
            GameStatus::Draw => "Draw!",
            GameStatus::InProgress => "Game still in progress",
        };
        writeln!(self.output, "{line}").context("Failed to write result")
    }

    /// Returns the finished game's status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    fn render_board(&mut self) -> Result<()> {
        let rendered = render(self.game.board());
        write!(self.output, "{rendered}").context("Failed to write board")
    }
}

/// Renders the board: one row per line, cells space-separated,
/// `.` for empty, `X` and `O` for the pieces.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if col > 0 {
                out.push(' ');
            }
            out.push(match board.get(row, col) {
                Cell::Empty => '.',
                Cell::Occupied(Piece::X) => 'X',
                Cell::Occupied(Piece::O) => 'O',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(3, 3);
        assert_eq!(render(&board), ". . .\n. . .\n. . .\n");
    }

    #[test]
    fn test_render_mixed_board() {
        let mut board = Board::new(3, 3);
        board.place(Move::new(0, 0, Piece::X)).expect("Valid move");
        board.place(Move::new(1, 1, Piece::O)).expect("Valid move");
        board.place(Move::new(2, 2, Piece::X)).expect("Valid move");
        assert_eq!(render(&board), "X . .\n. O .\n. . X\n");
    }
}
