//! Native counterpart of `GameWorker`: each search runs on its own thread,
//! replies once over a oneshot channel and then exits.

use crate::engine::config::EngineConfig;
use crate::worker::{SearchRequest, SearchResult};
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to start search thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("search thread stopped before replying")]
    Aborted,
}

/// Handle to one in-flight search. Dropping it abandons the result; the
/// thread finishes its search and its reply goes nowhere.
#[derive(Debug)]
pub struct SearchTask {
    reply: oneshot::Receiver<SearchResult>,
}

impl SearchTask {
    pub fn spawn(request: SearchRequest, config: Arc<EngineConfig>) -> Result<Self, TaskError> {
        let (tx, rx) = oneshot::channel();
        let name = format!("search-{}", request.strategy.name());
        thread::Builder::new().name(name).spawn(move || {
            let result = request.run(&config);
            if tx.send(result).is_err() {
                log::debug!("search result dropped, caller went away");
            }
        })?;
        Ok(Self { reply: rx })
    }

    pub async fn join(self) -> Result<SearchResult, TaskError> {
        self.reply.await.map_err(|_| TaskError::Aborted)
    }

    /// Blocking wait for callers outside an async runtime.
    pub fn join_blocking(self) -> Result<SearchResult, TaskError> {
        self.reply.blocking_recv().map_err(|_| TaskError::Aborted)
    }
}

/// Runs one search on a fresh thread and waits for its single reply.
pub async fn run_isolated(
    request: SearchRequest,
    config: Arc<EngineConfig>,
) -> Result<SearchResult, TaskError> {
    SearchTask::spawn(request, config)?.join().await
}
