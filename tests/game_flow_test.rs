//! End-to-end tests driving full games through the console runner.

use std::io::Cursor;
use tictactoe::{
    AiPlayer, Board, Cell, ConsoleRunner, Difficulty, Game, GameMode, GameStatus, HumanPlayer,
    MoveSource, Piece,
};

fn scripted_human(name: &str, piece: Piece, input: &str) -> Box<dyn MoveSource> {
    Box::new(HumanPlayer::new(
        name,
        piece,
        Cursor::new(input.to_string()),
        Vec::new(),
    ))
}

#[test]
fn test_naive_ai_takes_first_empty_after_human_move() {
    let human = scripted_human("Player1", Piece::X, "0 0\n");
    let ai = Box::new(AiPlayer::new(Piece::O, Difficulty::Naive));
    let mut game = Game::new(GameMode::PlayerVsAi, human, ai);

    game.play_turn().expect("Human moves");
    game.play_turn().expect("AI moves");

    assert_eq!(game.board().get(0, 0), Cell::Occupied(Piece::X));
    assert_eq!(game.board().get(0, 1), Cell::Occupied(Piece::O));
}

#[test]
fn test_heuristic_ai_takes_available_win() {
    // X at (0,0) and (0,1), (0,2) empty, X to move.
    let mut board = Board::new(3, 3);
    board
        .place(tictactoe::Move::new(0, 0, Piece::X))
        .expect("Valid move");
    board
        .place(tictactoe::Move::new(0, 1, Piece::X))
        .expect("Valid move");

    let mv = tictactoe::ai::pick_move(&board, Piece::X, Difficulty::Heuristic)
        .expect("Board not full");
    assert_eq!((mv.row(), mv.col()), (0, 2));
}

#[test]
fn test_heuristic_ai_blocks_human_threat() {
    // Human: (0,0) then (1,1). The AI's second move must block the
    // main diagonal at (2,2).
    let human = scripted_human("Player1", Piece::X, "0 0\n1 1\n");
    let ai = Box::new(AiPlayer::new(Piece::O, Difficulty::Heuristic));
    let mut game = Game::new(GameMode::PlayerVsAi, human, ai);

    for _ in 0..4 {
        game.play_turn().expect("Source moves");
    }

    assert_eq!(game.board().get(2, 2), Cell::Occupied(Piece::O));
}

#[test]
fn test_human_beats_heuristic_with_double_threat() {
    // X builds a fork: after (0,0), (1,1), (2,0) the AI can only block
    // one of the two completing cells, and (0,2) wins on the
    // anti-diagonal.
    let human = scripted_human("Player1", Piece::X, "0 0\n1 1\n2 0\n0 2\n");
    let ai = Box::new(AiPlayer::new(Piece::O, Difficulty::Heuristic));
    let game = Game::new(GameMode::PlayerVsAi, human, ai);

    let mut runner = ConsoleRunner::new(game, Vec::new());
    runner.play().expect("Game runs to completion");
    runner.print_result().expect("Result printed");

    assert_eq!(runner.status(), GameStatus::Won(Piece::X));
}

#[test]
fn test_two_player_win_reports_x_won() {
    let first = scripted_human("Player1", Piece::X, "0 0\n0 1\n0 2\n");
    let second = scripted_human("Player2", Piece::O, "1 0\n1 1\n");
    let game = Game::new(GameMode::PlayerVsPlayer, first, second);

    let mut output = Vec::new();
    let mut runner = ConsoleRunner::new(game, &mut output);
    runner.play().expect("Game runs to completion");
    runner.print_result().expect("Result printed");
    assert_eq!(runner.status(), GameStatus::Won(Piece::X));

    let text = String::from_utf8(output).expect("Utf8 output");
    // The winning move is rendered before the result line.
    assert!(text.contains("X X X"));
    assert!(text.ends_with("X won!\n"));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // Final layout: X O X / O X X / O X O.
    let first = scripted_human("Player1", Piece::X, "0 0\n0 2\n1 1\n1 2\n2 1\n");
    let second = scripted_human("Player2", Piece::O, "0 1\n1 0\n2 0\n2 2\n");
    let game = Game::new(GameMode::PlayerVsPlayer, first, second);

    let mut output = Vec::new();
    let mut runner = ConsoleRunner::new(game, &mut output);
    runner.play().expect("Game runs to completion");
    runner.print_result().expect("Result printed");
    assert_eq!(runner.status(), GameStatus::Draw);

    let text = String::from_utf8(output).expect("Utf8 output");
    assert!(text.ends_with("Draw!\n"));
}

#[test]
fn test_occupied_cell_causes_reprompt() {
    // Player2 first tries Player1's cell, then plays a legal move.
    let first = scripted_human("Player1", Piece::X, "0 0\n");
    let second = scripted_human("Player2", Piece::O, "0 0\n1 1\n");
    let mut game = Game::new(GameMode::PlayerVsPlayer, first, second);

    game.play_turn().expect("Player1 moves");
    game.play_turn().expect("Player2 retries then moves");

    assert_eq!(game.board().get(0, 0), Cell::Occupied(Piece::X));
    assert_eq!(game.board().get(1, 1), Cell::Occupied(Piece::O));
}

#[test]
fn test_out_of_range_cell_causes_reprompt() {
    let first = scripted_human("Player1", Piece::X, "5 5\n2 2\n");
    let second = scripted_human("Player2", Piece::O, "");
    let mut game = Game::new(GameMode::PlayerVsPlayer, first, second);

    game.play_turn().expect("Player1 retries then moves");
    assert_eq!(game.board().get(2, 2), Cell::Occupied(Piece::X));
}
