use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element};

use super::dom;
use crate::config::PageConfig;
use crate::logging;
use crate::html::escape_html;

const TAG: &str = "clipboard";

/// Copy a button's `data-copy` value and flash a "copied" label on it.
pub fn init(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    for button in dom::query_all::<Element>(document, "[data-copy]")? {
        let feedback = Rc::new(RefCell::new(CopyFeedback {
            button: button.clone(),
            label: format!(r#"<i class="bi bi-check"></i> {}"#, escape_html(&config.labels.copied)),
            duration_ms: config.copy_feedback_ms,
            saved: None,
            reset: None,
        }));
        let target = button.clone();
        dom::on(&button, "click", move |_| {
            let text = target.get_attribute("data-copy").unwrap_or_default();
            let feedback = feedback.clone();
            spawn_local(async move {
                match write_to_clipboard(&text).await {
                    Ok(()) => CopyFeedback::show(&feedback),
                    Err(e) => logging::error(TAG, "clipboard write rejected", &e),
                }
            });
        })?;
    }
    Ok(())
}

async fn write_to_clipboard(text: &str) -> Result<(), JsValue> {
    let promise = dom::window().navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Original button label, held while the "copied" label is showing.
struct CopyFeedback {
    button: Element,
    label: String,
    duration_ms: u32,
    saved: Option<String>,
    reset: Option<Timeout>,
}

impl CopyFeedback {
    fn show(this: &Rc<RefCell<Self>>) {
        let mut state = this.borrow_mut();
        // A second copy while the label is up keeps the first saved label
        if state.saved.is_none() {
            state.saved = Some(state.button.inner_html());
        }
        state.button.set_inner_html(&state.label);

        let handle = this.clone();
        // Replacing the timeout cancels the pending restore
        state.reset = Some(Timeout::new(state.duration_ms, move || handle.borrow_mut().restore()));
    }

    fn restore(&mut self) {
        if let Some(original) = self.saved.take() {
            self.button.set_inner_html(&original);
        }
    }
}
