//! Console tic-tac-toe with human and AI players.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of tri-state cells; `place` is the sole
//!   mutation path.
//! - **Rules**: pure win and draw detection over the board.
//! - **AI**: two stateless strategies - a naive first-empty-cell scan
//!   and a win/block heuristic.
//! - **Players**: the `MoveSource` trait with human (console) and AI
//!   implementations.
//! - **Game / Runner**: turn orchestration and console rendering.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
pub mod board;
pub mod cli;
pub mod game;
pub mod players;
pub mod rules;
pub mod runner;

pub use ai::Difficulty;
pub use board::{Board, Cell, Move, Piece, PlaceError};
pub use game::{Game, GameMode, GameStatus};
pub use players::{AiPlayer, HumanPlayer, LineInput, MoveSource};
pub use runner::ConsoleRunner;
