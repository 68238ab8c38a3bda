//! # activities-client
//!
//! Leptos + WASM frontend for the class-activity signup system. Fetches the
//! activity catalog over REST, renders activity cards and a signup form, and
//! re-synchronizes the view from a fresh server snapshot after every
//! mutating action.
//!
//! This crate contains pages, components, application state, and the REST
//! network layer. Rendering is snapshot-driven: the view is derived entirely
//! from the most recently applied catalog, so a refresh replaces prior
//! output instead of patching it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
