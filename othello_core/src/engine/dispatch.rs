use crate::engine::config::EngineConfig;
use crate::engine::monte_carlo::MonteCarloEngine;
use crate::engine::random::RandomEngine;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{Move, SearchStats, Searcher, Strategy};
use crate::logic::board::{Board, Color};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Player-facing strength levels; each maps to a `Strategy` preset in
/// `EngineConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Expert,
}

/// Picks a move for `color` with the default configuration and thread RNG.
/// `None` means `color` has no legal move.
#[must_use]
pub fn select_move(board: &Board, color: Color, strategy: Strategy) -> Option<Move> {
    let config = Arc::new(EngineConfig::default());
    select_move_with_stats(board, color, strategy, &config, &mut rand::thread_rng())
        .map(|(mv, _)| mv)
}

pub fn select_move_with_stats<R: Rng>(
    board: &Board,
    color: Color,
    strategy: Strategy,
    config: &Arc<EngineConfig>,
    rng: &mut R,
) -> Option<(Move, SearchStats)> {
    let mut searcher: Box<dyn Searcher + '_> = match strategy {
        Strategy::Random => Box::new(RandomEngine::new(rng)),
        Strategy::AlphaBeta { depth } => Box::new(AlphaBetaEngine::new(config.clone(), depth)),
        Strategy::MonteCarlo { trials } => Box::new(MonteCarloEngine::new(rng, trials)),
    };
    let result = searcher.search(board, color);
    if result.is_none() {
        log::debug!("{} found no legal move for {color}", strategy.name());
    }
    result
}
