//! # fitdash
//!
//! Leptos + WASM frontend for the training-hours tracker.
//!
//! The crate splits into a reactive-free core and a thin UI layer:
//!
//! - `session`: token storage behind [`session::CredentialStore`] and
//!   display-only claim decoding.
//! - `net`: the authenticated request client, its transport seam, and the
//!   typed auth and metrics endpoints.
//! - `util`: the route guard, series aggregation, and form validation.
//! - `state`: plain models the pages keep in signals.
//! - `app`, `pages`, `components`: Leptos views wired through context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the app into `<body>`.
///
/// The bundle is served as static files, so the app renders entirely on the
/// client and every read of the stored token happens in the browser.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("logger already installed: {e}");
    }
    log::info!("fitdash starting");
    leptos::mount::mount_to_body(app::App);
}
