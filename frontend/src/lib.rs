mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;

/// Resolves the runtime configuration, then mounts the application.
pub fn mount() {
    leptos::spawn_local(async {
        config::init().await;
        router::mount_app();
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("tasky frontend starting");
    mount();
}
