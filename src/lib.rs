//! # mercado-client
//!
//! Leptos + WASM frontend for the Mercado Local MX marketplace: end users
//! authenticate and browse businesses and promotional offers; business
//! owners manage their profile and offers behind a paid subscription.
//!
//! The session store (`state::session`) is the single source of truth for
//! authentication and authorization state; route guards (`util::guard`)
//! and pages read it through Leptos context.

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
    leptos::mount::hydrate_body(crate::app::App);
}
