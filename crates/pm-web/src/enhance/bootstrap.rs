//! Bindings to the Bootstrap 5 bundle loaded by the page (`window.bootstrap`).
//!
//! Every call catches, so a page without the bundle logs an error instead of
//! aborting the WASM module.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(static_method_of = Alert, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    pub fn get_or_create_instance(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn close(this: &Alert) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Popover;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Popover, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn show(this: &Modal) -> Result<(), JsValue>;
}
