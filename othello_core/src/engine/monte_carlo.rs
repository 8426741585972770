use crate::engine::{clamp_non_negative, elapsed_ms, now, Move, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::rules::{apply_move, legal_moves, play};
use rand::Rng;

/// Flat Monte Carlo: every root move gets the same number of random
/// playouts and the one with the most wins is played.
pub struct MonteCarloEngine<R: Rng> {
    rng: R,
    trials: u32,
    playouts: u32,
}

impl<R: Rng> MonteCarloEngine<R> {
    pub fn new(rng: R, trials: i32) -> Self {
        Self {
            rng,
            trials: clamp_non_negative(trials, "monte-carlo trials"),
            playouts: 0,
        }
    }

    pub const fn trials(&self) -> u32 {
        self.trials
    }

    pub fn best_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let moves = legal_moves(board, color);

        let mut best_move = None;
        let mut max_wins: Option<u32> = None;
        for mv in moves {
            let wins = self.win_count(board, mv, color);
            log::trace!("monte-carlo candidate {mv} won {wins}/{}", self.trials);
            if max_wins.map_or(true, |best| wins > best) {
                max_wins = Some(wins);
                best_move = Some(mv);
            }
        }
        best_move
    }

    /// Playouts after `mv` that end with `color` ahead.
    pub fn win_count(&mut self, board: &Board, mv: Move, color: Color) -> u32 {
        let start = play(board, mv, color);
        let mut wins = 0;
        for _ in 0..self.trials {
            let end = self.playout(start, color.opposite());
            self.playouts = self.playouts.saturating_add(1);
            if playout_winner(&end) == color {
                wins += 1;
            }
        }
        wins
    }

    /// Random moves alternate starting with `to_move`. The first side found
    /// without a move ends the playout; there is no passing here.
    fn playout(&mut self, mut board: Board, mut to_move: Color) -> Board {
        loop {
            let moves = legal_moves(&board, to_move);
            if moves.is_empty() {
                return board;
            }
            let Some(mv) = moves.get(self.rng.gen_range(0..moves.len())) else {
                return board;
            };
            apply_move(&mut board, mv, to_move);
            to_move = to_move.opposite();
        }
    }
}

/// Black wins only with strictly more disks; a tie counts for White.
#[must_use]
pub fn playout_winner(board: &Board) -> Color {
    if board.disk_count(Color::Black) > board.disk_count(Color::White) {
        Color::Black
    } else {
        Color::White
    }
}

impl<R: Rng> Searcher for MonteCarloEngine<R> {
    fn search(&mut self, board: &Board, color: Color) -> Option<(Move, SearchStats)> {
        self.playouts = 0;
        let start_time = now();

        let best = self.best_move(board, color)?;
        let stats = SearchStats {
            depth: 0,
            nodes: 0,
            playouts: self.playouts,
            time_ms: elapsed_ms(start_time),
        };
        log::debug!(
            "monte-carlo {} trials picked {best} for {color} ({} playouts, {}ms)",
            self.trials,
            stats.playouts,
            stats.time_ms
        );
        Some((best, stats))
    }
}
