pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod submission;
pub mod utils;

#[cfg(feature = "ssr")]
pub mod api;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    utils::panic_hook::init();
    leptos::mount_to_body(app::App);
}
