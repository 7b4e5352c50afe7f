use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::config::ServerConfig;
use super::pages;
use crate::status::SelfieStatus;

pub const SELFIE_STATUS_PATH: &str = "/api/recognition/selfie-status/";

/// Shared state for the demo handlers.
struct DemoState {
    config: ServerConfig,
    status_polls: AtomicU32,
}

/// Demo pages and mock endpoints. Static assets are layered on by `main`.
pub fn router(config: ServerConfig) -> Router {
    let state = Arc::new(DemoState {
        config,
        status_polls: AtomicU32::new(0),
    });

    Router::new()
        .route("/", get(gallery))
        .route("/selfie/", get(selfie))
        .route(SELFIE_STATUS_PATH, get(selfie_status))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct GalleryQuery {
    page: Option<u32>,
}

/// Full page for browsers, photo-card fragment for infinite-scroll requests.
async fn gallery(
    State(state): State<Arc<DemoState>>,
    Query(query): Query<GalleryQuery>,
    headers: HeaderMap,
) -> Html<String> {
    if is_fragment_request(&headers) {
        let page = query.page.unwrap_or(1);
        println!("[demo] gallery fragment, page {}", page);
        return Html(pages::gallery_fragment(&state.config, page));
    }
    Html(pages::gallery_page(&state.config))
}

async fn selfie() -> Html<String> {
    Html(pages::selfie_page())
}

/// Reports "processing" for the first `selfie_pending_polls` polls, then "recognised".
async fn selfie_status(State(state): State<Arc<DemoState>>) -> Json<SelfieStatus> {
    let polls = state.status_polls.fetch_add(1, Ordering::Relaxed) + 1;
    let processed = polls > state.config.selfie_pending_polls;
    if processed && polls == state.config.selfie_pending_polls + 1 {
        println!("[demo] selfie recognised after {} polls", polls);
    }

    Json(SelfieStatus {
        processed: Some(processed),
        error: None,
        has_selfie: Some(true),
    })
}

fn is_fragment_request(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
}
