//! Human player reading moves from an input stream.

use super::MoveSource;
use crate::board::{Board, Move, Piece};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Line-oriented input for human players.
///
/// Abstracts over stdin and in-memory buffers so the console can be
/// shared between two human players and tests can script input.
pub trait LineInput {
    /// Reads one line into `buf`, returning the number of bytes read
    /// (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

// Locks per call, so two players can share the console.
impl LineInput for std::io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        std::io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for std::io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        std::io::BufRead::read_line(self, buf)
    }
}

/// Human player. Reads a whitespace-separated `row col` pair per
/// prompt from the injected input (stdin in production, a buffer in
/// tests).
pub struct HumanPlayer<R, W> {
    name: String,
    piece: Piece,
    input: R,
    output: W,
}

impl<R: LineInput, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player bound to an input and output stream.
    pub fn new(name: impl Into<String>, piece: Piece, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            piece,
            input,
            output,
        }
    }

    /// Returns the player's assigned piece.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Reads one line and parses it as a `row col` pair.
    ///
    /// Returns `Ok(None)` on malformed input (caller re-prompts) and an
    /// error only when the input stream is closed.
    fn read_coordinates(&mut self) -> Result<Option<(usize, usize)>> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("Failed to read move input")?;
        if bytes == 0 {
            anyhow::bail!("Input closed while waiting for {}'s move", self.name);
        }

        let mut tokens = line.split_whitespace();
        let parsed = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(row), Some(col), None) => {
                row.parse::<usize>().ok().zip(col.parse::<usize>().ok())
            }
            _ => None,
        };
        Ok(parsed)
    }
}

impl<R: LineInput, W: Write> MoveSource for HumanPlayer<R, W> {
    fn propose(&mut self, _board: &Board) -> Result<Move> {
        loop {
            write!(self.output, "Your turn {} ({}): ", self.name, self.piece)
                .context("Failed to write prompt")?;
            self.output.flush().context("Failed to flush prompt")?;

            match self.read_coordinates()? {
                Some((row, col)) => {
                    debug!(player = %self.name, row, col, "Human entered move");
                    return Ok(Move::new(row, col, self.piece));
                }
                None => {
                    writeln!(self.output, "Enter two numbers, e.g. `0 2`.")
                        .context("Failed to write diagnostic")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
