//! # client
//!
//! Leptos + WASM frontend for the email workflow trigger.
//!
//! This crate contains the form component, the toast overlay, and the browser
//! transport that posts to the workflow webhook. Validation, submit phases,
//! and notice texts come from the shared `workflow` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// WASM entrypoint: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
