//! Command-line interface.

use crate::ai::Difficulty;
use clap::Parser;

/// Which opponent to play against. Clap-facing mirror of the
/// interactive mode prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Play against the computer.
    Ai,
    /// Two humans at the same console.
    Human,
}

/// Console tic-tac-toe with human and AI players.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with human and AI players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent kind. Prompted interactively when omitted.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// AI difficulty. Prompted interactively when omitted in AI mode.
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Name of the first player (plays X, moves first).
    #[arg(long, default_value = "Player1")]
    pub player1: String,

    /// Name of the second player (plays O, two-player mode only).
    #[arg(long, default_value = "Player2")]
    pub player2: String,
}
