use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::bootstrap::{Popover, Tooltip};
use super::dom;

/// Activate Bootstrap tooltips and popovers, which are opt-in.
pub fn init(document: &Document) -> Result<(), JsValue> {
    for trigger in dom::query_all::<Element>(document, r#"[data-bs-toggle="tooltip"]"#)? {
        Tooltip::new(&trigger)?;
    }
    for trigger in dom::query_all::<Element>(document, r#"[data-bs-toggle="popover"]"#)? {
        Popover::new(&trigger)?;
    }
    Ok(())
}
