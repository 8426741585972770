//! Othello rules engine with three interchangeable move pickers: uniform
//! random, depth-bounded alpha-beta and flat Monte Carlo.

pub mod engine;
pub mod logic;
#[cfg(not(target_arch = "wasm32"))]
pub mod task;
pub mod worker;

pub use engine::dispatch::{select_move, Difficulty};
pub use engine::{Move, Strategy};
pub use logic::board::{Board, BoardCoordinate, Cell, Color};
pub use worker::{SearchRequest, SearchResult};
