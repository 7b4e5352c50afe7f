use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::dom;

/// Ask before following links or submitting buttons marked `data-confirm`.
pub fn init(document: &Document) -> Result<(), JsValue> {
    for element in dom::query_all::<Element>(document, "[data-confirm]")? {
        let target = element.clone();
        dom::on(&element, "click", move |event| {
            let message = target.get_attribute("data-confirm").unwrap_or_default();
            let confirmed = dom::window().confirm_with_message(&message).unwrap_or(false);
            if !confirmed {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}
