use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::{Board, BoardCoordinate, Cell, Color};
use crate::logic::rules::legal_moves;
use std::sync::Arc;

/// Static score of a position, positive when Black is ahead. It has no notion
/// of whose turn it is; callers apply the mover's sign.
pub struct PositionalEvaluator {
    config: Arc<EngineConfig>,
}

impl Default for PositionalEvaluator {
    fn default() -> Self {
        Self::new(Arc::new(EngineConfig::default()))
    }
}

impl PositionalEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn positional(&self, board: &Board) -> i32 {
        BoardCoordinate::all()
            .map(|pos| match board.get(pos) {
                Cell::Black => self.config.weight(pos),
                Cell::White => -self.config.weight(pos),
                Cell::Empty => 0,
            })
            .sum()
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn mobility(&self, board: &Board) -> i32 {
        let black_moves = legal_moves(board, Color::Black).len() as i32;
        let white_moves = legal_moves(board, Color::White).len() as i32;
        (black_moves - white_moves) * self.config.mobility_weight
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        self.positional(board) + self.mobility(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_balanced() {
        let evaluator = PositionalEvaluator::default();
        assert_eq!(evaluator.evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_corner_dominates() {
        let evaluator = PositionalEvaluator::default();
        let board = Board::from_notation(
            "B-------/--------/--------/--------/--------/--------/--------/--------",
        )
        .unwrap();
        assert_eq!(evaluator.positional(&board), 2000);
        assert_eq!(evaluator.mobility(&board), 0);
        assert_eq!(evaluator.evaluate(&board), 2000);

        let mirrored = Board::from_notation(
            "W-------/--------/--------/--------/--------/--------/--------/--------",
        )
        .unwrap();
        assert_eq!(evaluator.evaluate(&mirrored), -2000);
    }

    #[test]
    fn test_x_square_penalised() {
        let evaluator = PositionalEvaluator::default();
        let board = Board::from_notation(
            "--------/-B------/--------/--------/--------/--------/--------/--------",
        )
        .unwrap();
        assert_eq!(evaluator.evaluate(&board), -400);
    }

    #[test]
    fn test_mobility_term() {
        // Black: (0,2). White: none.
        let board = Board::from_notation(
            "BW------/--------/--------/--------/--------/--------/--------/--------",
        )
        .unwrap();
        let evaluator = PositionalEvaluator::default();
        assert_eq!(evaluator.mobility(&board), 2);
        assert_eq!(evaluator.evaluate(&board), 2000 + 200 + 2);

        let heavy = PositionalEvaluator::new(Arc::new(EngineConfig {
            mobility_weight: 10,
            ..EngineConfig::default()
        }));
        assert_eq!(heavy.mobility(&board), 10);
    }
}
