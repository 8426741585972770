//! Othello driver: headless engine matches and one-shot move queries.
//!
//! - `othello play --black normal --white expert --games 10`
//! - `othello best-move --board <notation> --color white --strategy monte-carlo`

#[cfg(not(target_arch = "wasm32"))]
mod driver;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    driver::run()
}

// The browser build only ships the worker binary.
#[cfg(target_arch = "wasm32")]
fn main() {}
