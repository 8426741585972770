use crate::engine::config::EngineConfig;
use crate::engine::dispatch::select_move_with_stats;
use crate::engine::{Move, SearchStats, Strategy};
use crate::logic::board::{Board, Color};
use gloo_worker::{HandlerId, Worker, WorkerScope};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything a search needs, by value. The caller keeps no reference into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub board: Board,
    pub color: Color,
    pub strategy: Strategy,
}

/// `mv` is `None` when `color` has no legal move; that is a pass, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "move")]
    pub mv: Option<Move>,
    pub stats: SearchStats,
}

impl SearchRequest {
    pub fn run(&self, config: &Arc<EngineConfig>) -> SearchResult {
        self.run_with(config, &mut rand::thread_rng())
    }

    pub fn run_with<R: Rng>(&self, config: &Arc<EngineConfig>, rng: &mut R) -> SearchResult {
        let found = select_move_with_stats(&self.board, self.color, self.strategy, config, rng);
        SearchResult {
            mv: found.map(|(mv, _)| mv),
            stats: found.map(|(_, stats)| stats).unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub enum Input {
    ComputeMove(SearchRequest, EngineConfig),
}

#[derive(Serialize, Deserialize)]
pub enum Output {
    MoveFound(SearchResult),
}

/// Browser worker wrapper. It keeps nothing between requests, and the caller
/// drops the bridge once the single reply has arrived.
pub struct GameWorker;

impl Worker for GameWorker {
    type Input = Input;
    type Message = ();
    type Output = Output;

    fn create(_scope: &WorkerScope<Self>) -> Self {
        Self
    }

    fn update(&mut self, _scope: &WorkerScope<Self>, _msg: Self::Message) {}

    fn received(&mut self, scope: &WorkerScope<Self>, msg: Self::Input, id: HandlerId) {
        match msg {
            Input::ComputeMove(request, config) => {
                let result = request.run(&Arc::new(config));
                // Always answer, even without a move, so the caller never hangs.
                scope.respond(id, Output::MoveFound(result));
            }
        }
    }
}

/// Spawns a fresh worker from `path`, sends it one request and hands the
/// reply to `on_result`. Drop the returned bridge to tear the worker down,
/// either after the reply or to abandon the search.
#[cfg(target_arch = "wasm32")]
pub fn request_move<F>(
    path: &str,
    request: SearchRequest,
    config: EngineConfig,
    on_result: F,
) -> gloo_worker::WorkerBridge<GameWorker>
where
    F: Fn(SearchResult) + 'static,
{
    use gloo_worker::Spawnable;

    let bridge = GameWorker::spawner()
        .callback(move |Output::MoveFound(result)| on_result(result))
        .spawn(path);
    bridge.send(Input::ComputeMove(request, config));
    bridge
}
