//! # medfolio
//!
//! Leptos + WASM front end for the personal health records service.
//! Presents medical data (vaccines, medications, allergies, vitals, lab
//! results) to an authenticated user and gates protected views behind a
//! session check against the backend's cookie session.
//!
//! This crate contains pages, components, application state, the route
//! table with its navigation guard, and the credentialed HTTP transport.
//! The backend is consumed as an opaque HTTP API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
