use crate::logic::board::{Board, BoardCoordinate, Color};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod dispatch;
pub mod eval;
pub mod monte_carlo;
pub mod move_list;
pub mod random;
pub mod search;


/// A placement. Only cells reported by `legal_moves` are playable.
pub type Move = BoardCoordinate;

/// How the engine picks its move. Parameters are signed so that a bad value
/// from the outside is clamped to zero instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Random,
    AlphaBeta { depth: i32 },
    MonteCarlo { trials: i32 },
}

impl Strategy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::AlphaBeta { .. } => "alpha-beta",
            Self::MonteCarlo { .. } => "monte-carlo",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub playouts: u32,
    pub time_ms: u64,
}

pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

pub trait Searcher {
    fn search(&mut self, board: &Board, color: Color) -> Option<(Move, SearchStats)>;
}

/// Negative inputs count as zero.
pub(crate) fn clamp_non_negative(value: i32, what: &str) -> u32 {
    if value < 0 {
        log::warn!("{what} {value} is negative, searching with 0");
    }
    value.max(0).unsigned_abs()
}

pub(crate) fn now() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(window) = web_sys::window() {
            return window.performance().map_or(0.0, |p| p.now());
        }
        let global = js_sys::global();
        if let Ok(worker) = global.dyn_into::<web_sys::WorkerGlobalScope>() {
            return worker.performance().map_or(0.0, |p| p.now());
        }
        0.0
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        let since_the_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        #[allow(clippy::cast_precision_loss)]
        let time_ms = (since_the_epoch.as_secs() as f64).mul_add(
            1000.0,
            f64::from(since_the_epoch.subsec_nanos()) / 1_000_000.0,
        );
        time_ms
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn elapsed_ms(start: f64) -> u64 {
    (now() - start).max(0.0) as u64
}
