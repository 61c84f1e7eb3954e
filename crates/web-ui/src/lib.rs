//! Laala Web UI
//!
//! Web front-end for browsing Laala media collections and moderating
//! published content. Built with Dioxus and compiled to WebAssembly.

pub mod app;
pub mod components;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

pub use app::App;

/// Entry point when loaded as a WebAssembly module
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    dioxus::launch(App);
}
