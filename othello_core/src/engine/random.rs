use crate::engine::{Move, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::rules::legal_moves;
use rand::Rng;

pub struct RandomEngine<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomEngine<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Any legal move, uniformly.
    pub fn pick(&mut self, board: &Board, color: Color) -> Option<Move> {
        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return None;
        }
        moves.get(self.rng.gen_range(0..moves.len()))
    }
}

impl<R: Rng> Searcher for RandomEngine<R> {
    fn search(&mut self, board: &Board, color: Color) -> Option<(Move, SearchStats)> {
        let mv = self.pick(board, color)?;
        log::debug!("random picked {mv} for {color}");
        Some((mv, SearchStats::default()))
    }
}
