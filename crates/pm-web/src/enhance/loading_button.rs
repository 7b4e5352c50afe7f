use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlButtonElement};

use super::dom;

const SPINNER: &str = r#"<span class="loading"></span>"#;

/// Swap a clicked button to its loading label and disable it.
///
/// The page normally navigates away; the original label comes back after
/// `loading_reset_ms` in case it doesn't.
pub fn init(document: &Document, reset_ms: u32) -> Result<(), JsValue> {
    for button in dom::query_all::<HtmlButtonElement>(document, "button[data-loading-text]")? {
        let target = button.clone();
        dom::on(&button, "click", move |_| {
            if target.disabled() {
                return;
            }
            let original = target.inner_html();
            let loading = dom::data_attr(&target, "loading-text").unwrap_or_else(|| SPINNER.to_string());
            target.set_inner_html(&loading);
            target.set_disabled(true);

            let restore = target.clone();
            Timeout::new(reset_ms, move || {
                restore.set_inner_html(&original);
                restore.set_disabled(false);
            })
            .forget();
        })?;
    }
    Ok(())
}
