//! Web worker entry point; the page spawns one of these per engine move.

#[cfg(target_arch = "wasm32")]
fn main() {
    use gloo_worker::Registrable;
    use othello_core::worker::GameWorker;

    console_error_panic_hook::set_once();
    // A second init (hot reload) only loses the logger, not the worker.
    console_log::init_with_level(log::Level::Debug).ok();
    GameWorker::registrar().register();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
