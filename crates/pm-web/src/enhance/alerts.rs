use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::bootstrap::Alert;
use super::dom;
use crate::config::PageConfig;
use crate::logging;

const TAG: &str = "alerts";
const SELECTOR: &str = ".alert:not(.alert-permanent)";

/// Close every non-permanent alert after `alert_dismiss_ms`.
pub fn init(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    for alert in dom::query_all::<Element>(document, SELECTOR)? {
        Timeout::new(config.alert_dismiss_ms, move || {
            if let Err(e) = Alert::get_or_create_instance(&alert).and_then(|instance| instance.close()) {
                logging::error(TAG, "failed to close alert", &e);
            }
        })
        .forget();
    }
    Ok(())
}
