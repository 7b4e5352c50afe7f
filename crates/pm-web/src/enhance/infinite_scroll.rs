use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::dom;
use super::lazy_images::LazyImages;
use crate::api;
use crate::logging;
use crate::scroll::{PageOutcome, Paginator, ScrollMetrics, page_url};

const TAG: &str = "scroll";
const FRAGMENT_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

pub fn init(document: &Document, threshold_px: i32, images: &Rc<LazyImages>) -> Result<(), JsValue> {
    for container in dom::query_all::<Element>(document, "[data-infinite-scroll]")? {
        InfiniteScroll::new(container, f64::from(threshold_px), images.clone()).attach()?;
    }
    Ok(())
}

/// Appends the next page of a gallery when the reader nears the bottom.
///
/// Each container owns its page counter and busy flag. Images in appended
/// pages are handed to the page's lazy loader.
pub struct InfiniteScroll {
    container: Element,
    paginator: RefCell<Paginator>,
    threshold: f64,
    images: Rc<LazyImages>,
}

impl InfiniteScroll {
    pub fn new(container: Element, threshold: f64, images: Rc<LazyImages>) -> Rc<Self> {
        Rc::new(Self {
            container,
            paginator: RefCell::new(Paginator::new()),
            threshold,
            images,
        })
    }

    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        let this = self.clone();
        dom::on(&dom::window(), "scroll", move |_| this.on_scroll())
    }

    fn on_scroll(self: &Rc<Self>) {
        let Some(metrics) = read_metrics() else {
            return;
        };
        // Checked and claimed in one borrow: no await between them
        let Some(page) = self.paginator.borrow_mut().begin(metrics, self.threshold) else {
            return;
        };

        let this = self.clone();
        spawn_local(async move {
            let outcome = this.load(page).await;
            this.paginator.borrow_mut().finish(outcome);
        });
    }

    async fn load(&self, page: u32) -> PageOutcome {
        let href = match dom::window().location().href() {
            Ok(href) => href,
            Err(e) => {
                logging::error(TAG, "failed to read page location", &e);
                return PageOutcome::Failed;
            }
        };
        let url = match page_url(&href, page) {
            Ok(url) => url,
            Err(e) => {
                logging::error_msg(TAG, &format!("cannot build URL for page {}: {}", page, e));
                return PageOutcome::Failed;
            }
        };

        let Some(html) = api::get_text(&url, &[FRAGMENT_HEADER]).await else {
            logging::error_msg(TAG, &format!("failed to load page {}", page));
            return PageOutcome::Failed;
        };

        self.append_page(&html)
    }

    /// Append a fetched fragment to the container. Blank fragments append nothing.
    pub fn append_page(&self, html: &str) -> PageOutcome {
        let outcome = PageOutcome::from_fragment(html);
        if outcome != PageOutcome::Appended {
            return outcome;
        }
        if let Err(e) = self.container.insert_adjacent_html("beforeend", html) {
            logging::error(TAG, "failed to append page", &e);
            return PageOutcome::Failed;
        }
        if let Err(e) = self.images.watch_in(&self.container) {
            logging::error(TAG, "failed to watch appended images", &e);
        }
        outcome
    }
}

fn read_metrics() -> Option<ScrollMetrics> {
    let root = dom::window().document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_top: f64::from(root.scroll_top()),
        client_height: f64::from(root.client_height()),
        scroll_height: f64::from(root.scroll_height()),
    })
}
