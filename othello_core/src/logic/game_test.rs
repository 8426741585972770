use crate::logic::board::{Board, Cell, Color};
use crate::logic::eval_constants::TURN_CAP;
use crate::logic::game::{GameState, GameStatus, MoveRecord};
use crate::logic::rules::MoveError;

#[test]
fn test_opening_move() {
    let mut game = GameState::new();
    assert_eq!(game.turn, Color::Black);
    assert_eq!(game.turn_count, 1);

    assert!(game.make_move(2, 3).is_ok());
    assert_eq!(game.turn, Color::White);
    assert_eq!(game.turn_count, 2);
    assert_eq!(game.board.disk_count(Color::Black), 4);
    assert_eq!(game.board.disk_count(Color::White), 1);
    assert_eq!(game.status, GameStatus::Playing);
    assert!(matches!(
        game.history.last(),
        Some(MoveRecord::Place { flipped: 1, .. })
    ));
}

#[test]
fn test_rejected_moves_leave_state_alone() {
    let mut game = GameState::new();
    let before = game.board;

    assert_eq!(game.make_move(8, 0), Err(MoveError::OutOfBounds));
    assert_eq!(game.make_move(3, 3), Err(MoveError::Occupied));
    assert_eq!(game.make_move(0, 0), Err(MoveError::NoFlips));
    // (2,4) is a White move, not a Black one.
    assert_eq!(game.make_move(2, 4), Err(MoveError::NoFlips));

    assert_eq!(game.board, before);
    assert_eq!(game.turn, Color::Black);
    assert_eq!(game.turn_count, 1);
    assert!(game.history.is_empty());
}

#[test]
fn test_pass_only_when_stuck() {
    let mut game = GameState::new();
    assert_eq!(game.pass(), Err(MoveError::PassNotAllowed));

    let board = Board::from_notation(
        "BW------/--------/--------/--------/--------/--------/--------/--------",
    )
    .unwrap();
    let mut game = GameState::from_position(board, Color::White, 10);
    assert!(!game.is_over());
    assert!(game.must_pass());
    assert!(game.pass().is_ok());
    assert_eq!(game.turn, Color::Black);
    assert_eq!(game.turn_count, 10);

    // Black takes (0,2); White is left with no disks and the game ends.
    assert!(game.make_move(0, 2).is_ok());
    assert!(game.is_over());
    assert_eq!(
        game.status,
        GameStatus::Finished {
            winner: Some(Color::Black)
        }
    );
    assert_eq!(game.make_move(0, 3), Err(MoveError::GameOver));
    assert_eq!(game.pass(), Err(MoveError::GameOver));
}

#[test]
fn test_turn_cap_ends_the_game() {
    let mut game = GameState::from_position(Board::new(), Color::Black, TURN_CAP - 1);
    assert!(!game.is_over());
    assert!(game.make_move(2, 3).is_ok());
    assert_eq!(game.turn_count, TURN_CAP);
    assert!(game.is_over());
    assert_eq!(
        game.status,
        GameStatus::Finished {
            winner: Some(Color::Black)
        }
    );
}

#[test]
fn test_draw_has_no_winner() {
    let mut board = Board::empty();
    board.set(crate::logic::board::BoardCoordinate::new(0, 0).unwrap(), Cell::Black);
    board.set(crate::logic::board::BoardCoordinate::new(7, 7).unwrap(), Cell::White);
    let game = GameState::from_position(board, Color::Black, 20);
    assert_eq!(game.status, GameStatus::Finished { winner: None });
}
