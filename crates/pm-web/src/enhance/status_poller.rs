use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::api;
use crate::config::{Labels, PageConfig};
use crate::logging;
use crate::status::{SelfieStatus, StatusView, TONE_CLASSES};

const TAG: &str = "status";
pub const STATUS_ELEMENT_ID: &str = "selfie-status";

/// Poll the selfie status endpoint while `#selfie-status` is on the page.
///
/// Polls once immediately, then every `status_poll_ms` until the page unloads.
pub fn init(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id(STATUS_ELEMENT_ID) else {
        return Ok(());
    };

    let poller = Rc::new(StatusPoller {
        element,
        url: config.selfie_status_url.clone(),
        labels: config.labels.clone(),
    });
    logging::info(TAG, &format!("polling {} every {}ms", poller.url, config.status_poll_ms));

    poller.poll();
    let scheduled = poller.clone();
    Interval::new(config.status_poll_ms, move || scheduled.poll()).forget();
    Ok(())
}

struct StatusPoller {
    element: Element,
    url: String,
    labels: Labels,
}

impl StatusPoller {
    fn poll(self: &Rc<Self>) {
        let this = self.clone();
        spawn_local(async move {
            // Failures are logged by the request helper; the markup stays as is
            let Some(status) = api::get_json::<SelfieStatus>(&this.url).await else {
                return;
            };
            if let Some(view) = status.view() {
                this.render(&view);
            }
        });
    }

    fn render(&self, view: &StatusView) {
        self.element.set_inner_html(&view.markup(&self.labels));
        let classes = self.element.class_list();
        for tone in TONE_CLASSES {
            if tone != view.tone_class() {
                let _ = classes.remove_1(tone);
            }
        }
        let _ = classes.add_1(view.tone_class());
    }
}
