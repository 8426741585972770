use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, BoardCoordinate, Cell, Color, Direction};
use crate::logic::eval_constants::TURN_CAP;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinate is outside the board")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
    #[error("move does not flip any disk")]
    NoFlips,
    #[error("game is already over")]
    GameOver,
    #[error("cannot pass while a legal move exists")]
    PassNotAllowed,
}

/// Length of the opposing run starting next to `from` in `dir` if it is
/// closed by a disk of `color`, otherwise zero.
fn run_length(board: &Board, from: BoardCoordinate, dir: Direction, color: Color) -> usize {
    let own = Cell::from(color);
    let opp = Cell::from(color.opposite());

    let mut len = 0;
    let mut cursor = from.step(dir);
    while let Some(pos) = cursor {
        let cell = board.get(pos);
        if cell == opp {
            len += 1;
            cursor = pos.step(dir);
        } else if cell == own {
            return len;
        } else {
            return 0;
        }
    }
    0
}

/// Every disk that placing `color` at `mv` would turn over, direction by
/// direction in the order of `Direction::ALL`.
#[must_use]
pub fn flips_for(board: &Board, mv: Move, color: Color) -> Vec<BoardCoordinate> {
    let mut flips = Vec::new();
    for dir in Direction::ALL {
        let len = run_length(board, mv, dir, color);
        let mut cursor = mv;
        for _ in 0..len {
            match cursor.step(dir) {
                Some(next) => {
                    flips.push(next);
                    cursor = next;
                }
                None => break,
            }
        }
    }
    flips
}

/// Same answer as `!flips_for(..).is_empty()` for an empty cell, without
/// building the list.
#[must_use]
pub fn can_place(board: &Board, mv: Move, color: Color) -> bool {
    board.get(mv).is_empty()
        && Direction::ALL
            .iter()
            .any(|&dir| run_length(board, mv, dir, color) > 0)
}

/// Legal placements for `color` in row-major order.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for pos in BoardCoordinate::all() {
        if can_place(board, pos, color) {
            moves.push(pos);
        }
    }
    moves
}

#[must_use]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    BoardCoordinate::all().any(|pos| can_place(board, pos, color))
}

/// Places `color` at `mv` and turns every flanked run. The move must come
/// from `legal_moves`; nothing is re-validated here.
pub fn apply_move(board: &mut Board, mv: Move, color: Color) {
    let own = Cell::from(color);
    for dir in Direction::ALL {
        let len = run_length(board, mv, dir, color);
        let mut cursor = mv;
        for _ in 0..len {
            match cursor.step(dir) {
                Some(next) => {
                    board.set(next, own);
                    cursor = next;
                }
                None => break,
            }
        }
    }
    board.set(mv, own);
}

/// Copying variant of `apply_move`.
#[must_use]
pub fn play(board: &Board, mv: Move, color: Color) -> Board {
    let mut next = *board;
    apply_move(&mut next, mv, color);
    next
}

/// Ends the game once the turn counter reaches the cap, or when neither side
/// can place. One side lacking a move is only a pass.
#[must_use]
pub fn is_terminal(board: &Board, color_to_move: Color, turn_count: u32) -> bool {
    if turn_count >= TURN_CAP {
        return true;
    }
    if has_legal_move(board, color_to_move) {
        return false;
    }
    !has_legal_move(board, color_to_move.opposite())
}

/// Checks a human-initiated placement.
pub fn validate_move(board: &Board, mv: Move, color: Color) -> Result<(), MoveError> {
    if !board.get(mv).is_empty() {
        return Err(MoveError::Occupied);
    }
    if !can_place(board, mv, color) {
        return Err(MoveError::NoFlips);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn at(r: usize, c: usize) -> BoardCoordinate {
        BoardCoordinate::new(r, c).unwrap()
    }

    #[test]
    fn test_initial_legal_moves() {
        let board = Board::new();
        let moves: Vec<_> = legal_moves(&board, Color::Black).into_iter().collect();
        assert_eq!(moves, vec![at(2, 3), at(3, 2), at(4, 5), at(5, 4)]);

        let white: Vec<_> = legal_moves(&board, Color::White).into_iter().collect();
        assert_eq!(white, vec![at(2, 4), at(3, 5), at(4, 2), at(5, 3)]);
    }

    #[test]
    fn test_flips_single_direction() {
        let board = Board::new();
        assert_eq!(flips_for(&board, at(2, 3), Color::Black), vec![at(3, 3)]);
        assert!(flips_for(&board, at(0, 0), Color::Black).is_empty());
    }

    #[test]
    fn test_flips_multiple_directions() {
        // Black closes three White runs that meet at (4,4).
        let board = Board::from_notation(
            "--------/--------/--B---B-/---W-W--/--------/----W---/----B---/--------",
        )
        .unwrap();
        let mut flips = flips_for(&board, at(4, 4), Color::Black);
        flips.sort_by_key(|p| p.index());
        assert_eq!(flips, vec![at(3, 3), at(3, 5), at(5, 4)]);

        let after = play(&board, at(4, 4), Color::Black);
        assert_eq!(after.disk_count(Color::White), 0);
        assert_eq!(after.disk_count(Color::Black), 7);
    }

    #[test]
    fn test_run_off_board_or_to_empty_does_not_flip() {
        // White run to the edge with no closing Black disk.
        let board = Board::from_notation(
            "--------/--------/--------/--------/--------/--------/--------/-WWWWWWW",
        )
        .unwrap();
        assert!(!can_place(&board, at(7, 0), Color::Black));
        assert!(flips_for(&board, at(7, 0), Color::Black).is_empty());

        // White run ending on an empty cell.
        let board = Board::from_notation(
            "--------/--------/--------/--------/--------/--------/--------/-WW-B---",
        )
        .unwrap();
        assert!(!can_place(&board, at(7, 0), Color::Black));
        // Adjacent own disk with zero run length.
        assert!(!can_place(&board, at(7, 5), Color::Black));
    }

    #[test]
    fn test_applied_move_cannot_be_replayed() {
        let board = Board::new();
        let after = play(&board, at(2, 3), Color::Black);
        assert_eq!(after.get(at(2, 3)), Cell::Black);
        assert_eq!(after.get(at(3, 3)), Cell::Black);
        assert!(!can_place(&after, at(2, 3), Color::Black));
        assert!(!can_place(&after, at(2, 3), Color::White));
        assert_eq!(
            validate_move(&after, at(2, 3), Color::Black),
            Err(MoveError::Occupied)
        );
        // The source board is untouched.
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_validate_move() {
        let board = Board::new();
        assert_eq!(validate_move(&board, at(2, 3), Color::Black), Ok(()));
        assert_eq!(
            validate_move(&board, at(0, 0), Color::Black),
            Err(MoveError::NoFlips)
        );
        assert_eq!(
            validate_move(&board, at(3, 3), Color::Black),
            Err(MoveError::Occupied)
        );
    }

    #[test]
    fn test_legal_moves_invariants_on_random_games() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut board = Board::new();
            let mut color = Color::Black;
            let mut turn = 1;
            while !is_terminal(&board, color, turn) {
                let moves = legal_moves(&board, color);
                for mv in &moves {
                    assert!(board.get(*mv).is_empty());
                    let flips = flips_for(&board, *mv, color);
                    assert!(!flips.is_empty());
                    // Every flip is currently an opposing disk.
                    for f in &flips {
                        assert_eq!(board.get(*f).color(), Some(color.opposite()));
                    }
                }
                if moves.is_empty() {
                    color = color.opposite();
                    continue;
                }
                let mv = moves[rng.gen_range(0..moves.len())];
                let before_own = board.disk_count(color);
                let flipped = flips_for(&board, mv, color).len();
                apply_move(&mut board, mv, color);
                assert_eq!(board.disk_count(color), before_own + flipped + 1);
                assert!(!can_place(&board, mv, color));
                color = color.opposite();
                turn += 1;
            }
        }
    }

    #[test]
    fn test_terminal_at_turn_cap() {
        assert!(is_terminal(&Board::new(), Color::Black, TURN_CAP));
        assert!(is_terminal(&Board::new(), Color::White, TURN_CAP + 3));
        assert!(!is_terminal(&Board::new(), Color::Black, 1));
        assert!(!is_terminal(&Board::new(), Color::White, TURN_CAP - 1));
    }

    #[test]
    fn test_single_side_without_moves_is_a_pass() {
        // Black can take (0,2); White cannot flank anything.
        let board = Board::from_notation(
            "BW------/--------/--------/--------/--------/--------/--------/--------",
        )
        .unwrap();
        assert!(legal_moves(&board, Color::White).is_empty());
        assert_eq!(legal_moves(&board, Color::Black).len(), 1);
        assert!(!is_terminal(&board, Color::White, 10));
        assert!(!is_terminal(&board, Color::Black, 10));
    }

    #[test]
    fn test_terminal_when_nobody_can_move() {
        let board = Board::from_notation(
            "BBBB----/--------/--------/--------/--------/--------/--------/--------",
        )
        .unwrap();
        assert!(is_terminal(&board, Color::Black, 5));
        assert!(is_terminal(&board, Color::White, 5));

        let mut full = Board::empty();
        for pos in BoardCoordinate::all() {
            full.set(pos, Cell::White);
        }
        assert!(is_terminal(&full, Color::Black, 5));
    }
}
