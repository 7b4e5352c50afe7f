use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlFormElement};

use super::dom;

/// Bootstrap client-side validation: block invalid submits and reveal feedback styles.
pub fn init(document: &Document) -> Result<(), JsValue> {
    for form in dom::query_all::<HtmlFormElement>(document, ".needs-validation")? {
        let target = form.clone();
        dom::on(&form, "submit", move |event| {
            if !target.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            let _ = target.class_list().add_1("was-validated");
        })?;
    }
    Ok(())
}
