//! Watch Appraisal Report Entry (Leptos + WASM)

mod app;
mod components;
mod reader;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("鑑定レポート入力画面を起動");
    leptos::mount::mount_to_body(app::App);
}
