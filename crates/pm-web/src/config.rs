//! Page-level configuration for the enhancement bundle.
//!
//! Pages may embed `<script type="application/json" id="pm-config">{...}</script>`
//! to override any of the defaults below. Missing fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "pm-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Endpoint polled by the selfie status widget.
    pub selfie_status_url: String,
    pub status_poll_ms: u32,
    /// Delay before non-permanent alerts are closed.
    pub alert_dismiss_ms: u32,
    /// Fallback re-enable delay for loading buttons.
    pub loading_reset_ms: u32,
    /// How long the "copied" label stays on a copy button.
    pub copy_feedback_ms: u32,
    /// Distance from the document bottom that triggers the next page.
    pub scroll_threshold_px: i32,
    pub labels: Labels,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selfie_status_url: "/api/recognition/selfie-status/".to_string(),
            status_poll_ms: 5_000,
            alert_dismiss_ms: 5_000,
            loading_reset_ms: 30_000,
            copy_feedback_ms: 2_000,
            scroll_threshold_px: 500,
            labels: Labels::default(),
        }
    }
}

/// User-visible strings rendered by the enhancements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub copied: String,
    pub face_recognized: String,
    pub processing: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            copied: "Скопировано".to_string(),
            face_recognized: "Лицо распознано".to_string(),
            processing: "Обрабатывается...".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse the inline config. Blank input yields the defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }
}
