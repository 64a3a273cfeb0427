//! # client
//!
//! Leptos + WASM sign-in screen with a light/dark theme switch.
//!
//! The crate builds twice: with `ssr` it is linked into the `server` binary
//! to render HTML, and with `hydrate` it is compiled to WASM and attaches
//! event handlers to that HTML in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating sign-in app");
    leptos::mount::hydrate_body(app::App);
}
