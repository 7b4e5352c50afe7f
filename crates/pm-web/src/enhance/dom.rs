//! Small DOM helpers shared by the enhancement routines.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

pub fn window() -> Window {
    web_sys::window().expect("no window")
}

/// All elements matching `selector`, cast to `T`. Elements of another type are skipped.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    Ok(collect(&document.query_selector_all(selector)?))
}

/// Like [`query_all`], scoped to the descendants of `root`.
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, JsValue> {
    Ok(collect(&root.query_selector_all(selector)?))
}

fn collect<T: JsCast>(nodes: &NodeList) -> Vec<T> {
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn on<T, F>(target: &T, event: &str, handler: F) -> Result<(), JsValue>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// `data-*` attribute value, treating an empty value as absent.
pub fn data_attr(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(&format!("data-{}", name))
        .filter(|value| !value.is_empty())
}
