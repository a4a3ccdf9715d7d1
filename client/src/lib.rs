//! # meetinghub-client
//!
//! Leptos + WASM frontend for the meeting knowledge hub.
//!
//! This crate contains pages, components, per-page state models, the mock
//! data layer and the assistant responder seam. Everything a page shows is
//! loaded from embedded fixtures and lives in that page's local signals for
//! the session; nothing is persisted.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("meetinghub client hydrating");
    leptos::mount::hydrate_body(app::App);
}
