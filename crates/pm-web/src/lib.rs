//! PhotoMarket page enhancements.
//!
//! The `hydrate` build compiles to WASM and enhances server-rendered pages
//! (Bootstrap widgets, input masks, status polling, infinite scroll, camera
//! capture, lightbox). The `ssr` build is a development server that renders
//! pages carrying the markup hooks those enhancements look for.

pub mod components;
pub mod config;
pub mod format;
pub mod html;
pub mod scroll;
pub mod status;

#[cfg(feature = "hydrate")]
mod api;
#[cfg(feature = "hydrate")]
pub mod enhance;
#[cfg(feature = "hydrate")]
mod logging;

#[cfg(feature = "ssr")]
pub mod server;

/// WASM entry point: runs every enhancement once the DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    enhance::run_when_ready();
}
