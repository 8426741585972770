use crate::engine::config::EngineConfig;
use crate::engine::eval::PositionalEvaluator;
use crate::engine::move_list::MoveList;
use crate::engine::{clamp_non_negative, elapsed_ms, now, Evaluator, Move, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::rules::{legal_moves, play};
use std::sync::Arc;

const INFINITY: i32 = 1_000_000;

pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: PositionalEvaluator,
    depth: u32,
    nodes_searched: u32,
}

impl AlphaBetaEngine {
    pub fn new(config: Arc<EngineConfig>, depth: i32) -> Self {
        Self {
            evaluator: PositionalEvaluator::new(config.clone()),
            config,
            depth: clamp_non_negative(depth, "alpha-beta depth"),
            nodes_searched: 0,
        }
    }

    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Highest destination weight first. The sort is stable, so equal
    /// weights stay in row-major order.
    fn order_moves(&self, moves: &mut MoveList) {
        let config = &self.config;
        moves.sort_by(|a, b| config.weight(*b).cmp(&config.weight(*a)));
    }

    /// Root of the search. Every candidate is scored from `color`'s point of
    /// view and the first strictly better one wins.
    pub fn best_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let mut moves = legal_moves(board, color);
        if moves.is_empty() {
            return None;
        }
        self.order_moves(&mut moves);

        let depth = i32::try_from(self.depth).unwrap_or(i32::MAX);
        let mut best_move = None;
        let mut best_value = i32::MIN;
        let mut alpha = -INFINITY;
        let beta = INFINITY;

        for mv in moves {
            let next = play(board, mv, color);
            let value = self.alpha_beta(
                &next,
                color.opposite(),
                depth.saturating_sub(1),
                alpha,
                beta,
                false,
                color,
            );
            log::trace!("alpha-beta candidate {mv} scored {value}");

            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }

            alpha = alpha.max(best_value);
            if alpha >= beta {
                break;
            }
        }
        best_move
    }

    /// Minimax with explicit max/min layers. Leaves are scored in `root`'s
    /// point of view, so maximizing layers are the ones where `root` moves.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        turn: Color,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Color,
    ) -> i32 {
        self.nodes_searched = self.nodes_searched.saturating_add(1);

        if depth <= 0 {
            return root.sign() * self.evaluator.evaluate(board);
        }

        let moves = legal_moves(board, turn);
        if moves.is_empty() {
            if legal_moves(board, turn.opposite()).is_empty() {
                return root.sign() * self.evaluator.evaluate(board);
            }
            // Pass: the opponent moves on the same board, one ply is spent.
            return self.alpha_beta(
                board,
                turn.opposite(),
                depth - 1,
                alpha,
                beta,
                !maximizing,
                root,
            );
        }

        if maximizing {
            let mut value = -INFINITY;
            for mv in moves {
                let next = play(board, mv, turn);
                value = value.max(self.alpha_beta(
                    &next,
                    turn.opposite(),
                    depth - 1,
                    alpha,
                    beta,
                    false,
                    root,
                ));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for mv in moves {
                let next = play(board, mv, turn);
                value = value.min(self.alpha_beta(
                    &next,
                    turn.opposite(),
                    depth - 1,
                    alpha,
                    beta,
                    true,
                    root,
                ));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, board: &Board, color: Color) -> Option<(Move, SearchStats)> {
        self.nodes_searched = 0;
        let start_time = now();

        let best = self.best_move(board, color)?;
        let stats = SearchStats {
            #[allow(clippy::cast_possible_truncation)]
            depth: self.depth.min(u32::from(u8::MAX)) as u8,
            nodes: self.nodes_searched,
            playouts: 0,
            time_ms: elapsed_ms(start_time),
        };
        log::debug!(
            "alpha-beta depth {} picked {best} for {color} ({} nodes, {}ms)",
            self.depth,
            stats.nodes,
            stats.time_ms
        );
        Some((best, stats))
    }
}
