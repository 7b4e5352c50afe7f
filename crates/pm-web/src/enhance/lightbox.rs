use leptos::html::Div;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::bootstrap::Modal;
use super::dom;
use crate::components::Lightbox;
use crate::logging;

const TAG: &str = "lightbox";

/// Open `[data-lightbox]` targets in a lightbox instead of navigating.
///
/// Delegated from the document, so triggers appended later are covered too.
/// The photo URL is the `data-lightbox` value, falling back to `href`.
pub fn init(document: &Document) -> Result<(), JsValue> {
    dom::on(document, "click", |event| {
        let Some(trigger) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("[data-lightbox]").ok().flatten())
        else {
            return;
        };
        let Some(url) = dom::data_attr(&trigger, "lightbox").or_else(|| trigger.get_attribute("href")) else {
            return;
        };
        event.prevent_default();
        if let Err(e) = open_lightbox(url) {
            logging::error(TAG, "failed to open lightbox", &e);
        }
    })
}

/// Show `image_url` in a modal. The modal is removed from the document once
/// hidden, or straight away if it cannot be shown.
#[wasm_bindgen(js_name = openLightbox)]
pub fn open_lightbox(image_url: String) -> Result<(), JsValue> {
    let body = dom::window()
        .document()
        .and_then(|document| document.body())
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let modal_ref = NodeRef::<Div>::new();
    // Dropping the mount handle unmounts the modal, so every early return cleans up
    let mounted = mount_to(body, move || view! { <Lightbox image_url=image_url node_ref=modal_ref /> });
    let Some(modal) = modal_ref.get_untracked() else {
        return Err(JsValue::from_str("lightbox did not mount"));
    };

    Modal::new(&modal)?.show()?;

    let on_hidden: Closure<dyn FnMut()> = Closure::once(move || drop(mounted));
    modal.add_event_listener_with_callback("hidden.bs.modal", on_hidden.as_ref().unchecked_ref())?;
    on_hidden.forget();
    Ok(())
}
