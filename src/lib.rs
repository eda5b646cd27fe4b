//! # injury-client
//!
//! Leptos + WASM single-page client for the football injury prediction
//! service. Authenticates against the identity backend with either email and
//! password or a Google provider redirect, then gates the prediction views
//! behind a validated session token.
//!
//! This crate contains the session store, the redirect token extractor, the
//! authenticated HTTP client, the route guard state machine, the header
//! session lifecycle controller, and the pages that drive them.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: installs logging and mounts the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
