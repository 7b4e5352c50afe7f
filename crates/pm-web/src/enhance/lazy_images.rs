use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry};

use super::dom;
use crate::logging;

const TAG: &str = "lazy-images";
const SELECTOR: &str = "img[data-src]";

/// Swaps `data-src` into `src` once an image scrolls into view.
///
/// One instance serves the whole page, so content appended later (infinite
/// scroll) is watched by the same observer.
pub struct LazyImages {
    observer: Option<IntersectionObserver>,
}

impl LazyImages {
    /// Observer-backed when `IntersectionObserver` exists, eager otherwise.
    pub fn new() -> Rc<Self> {
        let supported = Reflect::has(dom::window().as_ref(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            logging::warn(TAG, "IntersectionObserver unavailable, loading images eagerly");
            return Self::eager();
        }

        match create_observer() {
            Ok(observer) => Rc::new(Self {
                observer: Some(observer),
            }),
            Err(e) => {
                logging::error(TAG, "failed to create observer, loading images eagerly", &e);
                Self::eager()
            }
        }
    }

    /// Reveal every image as soon as it is watched.
    pub fn eager() -> Rc<Self> {
        Rc::new(Self { observer: None })
    }

    pub fn watch_document(&self, document: &Document) -> Result<(), JsValue> {
        self.watch(dom::query_all::<Element>(document, SELECTOR)?)
    }

    /// Watch the pending images under `root`. Already revealed ones have no `data-src`.
    pub fn watch_in(&self, root: &Element) -> Result<(), JsValue> {
        self.watch(dom::query_all_in::<Element>(root, SELECTOR)?)
    }

    fn watch(&self, images: Vec<Element>) -> Result<(), JsValue> {
        match &self.observer {
            Some(observer) => images.iter().for_each(|image| observer.observe(image)),
            None => {
                for image in &images {
                    reveal(image)?;
                }
            }
        }
        Ok(())
    }
}

fn create_observer() -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let image = entry.target();
                if let Err(e) = reveal(&image) {
                    logging::error(TAG, "failed to load image", &e);
                }
                observer.unobserve(&image);
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(observer)
}

fn reveal(image: &Element) -> Result<(), JsValue> {
    if let Some(src) = image.get_attribute("data-src") {
        image.set_attribute("src", &src)?;
        image.remove_attribute("data-src")?;
    }
    Ok(())
}
