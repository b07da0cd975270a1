//! Console tic-tac-toe entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tictactoe::cli::{Cli, ModeArg};
use tictactoe::{
    AiPlayer, ConsoleRunner, Difficulty, Game, GameMode, HumanPlayer, LineInput, MoveSource, Piece,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Quiet by default so log lines never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mode = match cli.mode {
        Some(ModeArg::Ai) => GameMode::PlayerVsAi,
        Some(ModeArg::Human) => GameMode::PlayerVsPlayer,
        None => prompt_mode(&mut std::io::stdin(), &mut std::io::stdout())?,
    };
    info!(%mode, "Mode selected");

    let game = match mode {
        GameMode::PlayerVsAi => {
            let difficulty = match cli.difficulty {
                Some(difficulty) => difficulty,
                None => prompt_difficulty(&mut std::io::stdin(), &mut std::io::stdout())?,
            };
            info!(%difficulty, "Difficulty selected");

            let human: Box<dyn MoveSource> = Box::new(HumanPlayer::new(
                cli.player1,
                Piece::X,
                std::io::stdin(),
                std::io::stdout(),
            ));
            let ai: Box<dyn MoveSource> = Box::new(AiPlayer::new(Piece::O, difficulty));
            Game::new(mode, human, ai)
        }
        GameMode::PlayerVsPlayer => {
            let first: Box<dyn MoveSource> = Box::new(HumanPlayer::new(
                cli.player1,
                Piece::X,
                std::io::stdin(),
                std::io::stdout(),
            ));
            let second: Box<dyn MoveSource> = Box::new(HumanPlayer::new(
                cli.player2,
                Piece::O,
                std::io::stdin(),
                std::io::stdout(),
            ));
            Game::new(mode, first, second)
        }
    };

    let mut runner = ConsoleRunner::new(game, std::io::stdout());
    runner.play()?;
    runner.print_result()?;

    Ok(())
}

/// Asks for the game mode: 1 = vs AI, 2 = vs human.
fn prompt_mode(input: &mut impl LineInput, output: &mut impl Write) -> Result<GameMode> {
    writeln!(output, "Select game mode:")?;
    writeln!(output, "1 - Player vs AI")?;
    writeln!(output, "2 - Player vs Player")?;
    output.flush()?;
    loop {
        match read_choice(input, output)? {
            1 => return Ok(GameMode::PlayerVsAi),
            2 => return Ok(GameMode::PlayerVsPlayer),
            other => {
                writeln!(output, "Enter 1 or 2 (got {other}).")?;
                output.flush()?;
            }
        }
    }
}

/// Asks for the AI difficulty: 1 = naive, 2 = heuristic.
fn prompt_difficulty(input: &mut impl LineInput, output: &mut impl Write) -> Result<Difficulty> {
    write!(output, "Select AI difficulty (1 - naive, 2 - heuristic): ")?;
    output.flush()?;
    loop {
        match read_choice(input, output)? {
            1 => return Ok(Difficulty::Naive),
            2 => return Ok(Difficulty::Heuristic),
            other => {
                writeln!(output, "Enter 1 or 2 (got {other}).")?;
                output.flush()?;
            }
        }
    }
}

/// Reads one integer choice, re-prompting on non-integer input and
/// failing fast when the input stream is closed.
fn read_choice(input: &mut impl LineInput, output: &mut impl Write) -> Result<u32> {
    loop {
        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("Failed to read selection")?;
        if bytes == 0 {
            anyhow::bail!("Input closed during selection");
        }
        match line.trim().parse::<u32>() {
            Ok(choice) => return Ok(choice),
            Err(_) => {
                write!(output, "Enter a number: ")?;
                output.flush()?;
            }
        }
    }
}
