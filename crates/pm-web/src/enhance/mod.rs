//! Page enhancements, each a leaf routine run once per page load.
//!
//! A routine that fails to initialise is logged and the rest still run.

mod alerts;
mod bootstrap;
mod camera;
mod clipboard;
mod confirm;
mod dom;
mod infinite_scroll;
mod inputs;
mod lazy_images;
mod lightbox;
mod loading_button;
mod preview;
mod status_poller;
mod validation;
mod widgets;

pub use camera::CameraCapture;
pub use infinite_scroll::InfiniteScroll;
pub use lazy_images::LazyImages;
pub use lightbox::open_lightbox;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::logging;

/// Run [`enhance_page`] now, or on `DOMContentLoaded` if the document is still loading.
pub fn run_when_ready() {
    let Some(document) = dom::window().document() else {
        logging::error_msg("enhance", "no document");
        return;
    };

    if document.ready_state() != "loading" {
        enhance_page(&document);
        return;
    }

    let ready = document.clone();
    let on_ready = Closure::once_into_js(move || enhance_page(&ready));
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        logging::error("enhance", "failed to wait for DOMContentLoaded", &e);
    }
}

pub fn enhance_page(document: &Document) {
    let config = load_config(document);

    report("alerts", alerts::init(document, &config));
    report("widgets", widgets::init(document));
    report("preview", preview::init(document));
    let images = LazyImages::new();
    report("lazy-images", images.watch_document(document));
    report("validation", validation::init(document));
    report("loading-button", loading_button::init(document, config.loading_reset_ms));
    report("confirm", confirm::init(document));
    report("inputs", inputs::init(document));
    report("clipboard", clipboard::init(document, &config));
    report("status", status_poller::init(document, &config));
    report("scroll", infinite_scroll::init(document, config.scroll_threshold_px, &images));
    report("camera", camera::init(document));
    report("lightbox", lightbox::init(document));
}

/// Inline `#pm-config` JSON, or defaults when absent or malformed.
fn load_config(document: &Document) -> PageConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };

    PageConfig::from_json(&text).unwrap_or_else(|e| {
        logging::error_msg("config", &format!("invalid #{} JSON, using defaults: {}", CONFIG_ELEMENT_ID, e));
        PageConfig::default()
    })
}

fn report(tag: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        logging::error(tag, "initialisation failed", &e);
    }
}
