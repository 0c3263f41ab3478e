//! Accident Detection Dashboard (Leptos + WASM)

mod analyze;
mod api;
mod app;
mod components;
mod config;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // 二重初期化時のエラーは無視
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
