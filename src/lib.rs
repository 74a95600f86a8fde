//! # mapleview
//!
//! Leptos + WASM frontend for the MapleView real-estate listing and
//! AI-valuation application.
//!
//! The crate renders three route-level screens: a market-overview landing
//! page, a map/search view with property markers and a detail modal, and a
//! valuation form with a result card and comparable-price histogram. All
//! computation (search, valuation model, comparable selection) lives behind
//! the HTTP API; this crate marshals form input into requests and renders
//! JSON responses. The external Leaflet and Chart.js widgets are reached
//! through thin `wasm-bindgen` bridges in `components`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
