//! HTTP helpers for the browser build (gloo-net over `fetch`).
//!
//! Failures are logged and surface as `None`; callers keep their current UI.

use serde::de::DeserializeOwned;

use crate::logging;

const TAG: &str = "http";

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Option<T> {
    let response = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| logging::error_msg(TAG, &format!("request failed for {}: {}", url, e)))
        .ok()?;

    if !response.ok() {
        logging::error_msg(TAG, &format!("HTTP error for {}: {}", url, response.status()));
        return None;
    }

    response
        .json()
        .await
        .map_err(|e| logging::error_msg(TAG, &format!("JSON parse error for {}: {}", url, e)))
        .ok()
}

/// GET `url` as text with extra request headers.
pub async fn get_text(url: &str, headers: &[(&str, &str)]) -> Option<String> {
    let request = headers
        .iter()
        .fold(gloo_net::http::Request::get(url), |request, (name, value)| {
            request.header(name, value)
        });

    let response = request
        .send()
        .await
        .map_err(|e| logging::error_msg(TAG, &format!("request failed for {}: {}", url, e)))
        .ok()?;

    if !response.ok() {
        logging::error_msg(TAG, &format!("HTTP error for {}: {}", url, response.status()));
        return None;
    }

    response
        .text()
        .await
        .map_err(|e| logging::error_msg(TAG, &format!("failed to read body of {}: {}", url, e)))
        .ok()
}
