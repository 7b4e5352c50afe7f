//! Selfie recognition status: response shape and the markup each state renders.

use serde::{Deserialize, Serialize};

use crate::config::Labels;
use crate::html::escape_html;

/// Text classes owned by the status element. Exactly one is applied per state.
pub const TONE_CLASSES: [&str; 3] = ["text-success", "text-danger", "text-warning"];

/// Body of `GET /api/recognition/selfie-status/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfieStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_selfie: Option<bool>,
}

/// What the status element should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Recognized,
    Failed(String),
    Processing,
}

impl SelfieStatus {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Pick the state to render. `None` leaves the current markup in place.
    ///
    /// `processed` wins over `error`, which wins over `has_selfie`.
    pub fn view(&self) -> Option<StatusView> {
        if self.processed == Some(true) {
            return Some(StatusView::Recognized);
        }
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return Some(StatusView::Failed(error.to_string()));
        }
        if self.has_selfie == Some(true) {
            return Some(StatusView::Processing);
        }
        None
    }
}

impl StatusView {
    pub fn tone_class(&self) -> &'static str {
        match self {
            StatusView::Recognized => TONE_CLASSES[0],
            StatusView::Failed(_) => TONE_CLASSES[1],
            StatusView::Processing => TONE_CLASSES[2],
        }
    }

    /// Inner HTML for the status element. Server-provided text is escaped.
    pub fn markup(&self, labels: &Labels) -> String {
        let (icon, text) = match self {
            StatusView::Recognized => ("bi-check-circle", escape_html(&labels.face_recognized)),
            StatusView::Failed(message) => ("bi-exclamation-circle", escape_html(message)),
            StatusView::Processing => ("bi-hourglass-split", escape_html(&labels.processing)),
        };
        format!(r#"<i class="bi {} {}"></i> {}"#, icon, self.tone_class(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(body: &str) -> Option<String> {
        let status = SelfieStatus::parse(body).ok()?;
        Some(status.view()?.markup(&Labels::default()))
    }

    #[test]
    fn test_processed_renders_success() {
        let markup = render(r#"{"processed": true}"#).unwrap();
        assert!(markup.contains("bi-check-circle"));
        assert!(markup.contains("text-success"));
        assert!(markup.contains("Лицо распознано"));
    }

    #[test]
    fn test_error_renders_message() {
        let markup = render(r#"{"error": "x"}"#).unwrap();
        assert!(markup.contains("text-danger"));
        assert!(markup.ends_with(" x"));
    }

    #[test]
    fn test_has_selfie_renders_pending() {
        let markup = render(r#"{"processed": false, "has_selfie": true, "error": null}"#).unwrap();
        assert!(markup.contains("bi-hourglass-split"));
        assert!(markup.contains("Обрабатывается..."));
    }

    #[test]
    fn test_processed_wins_over_error() {
        let status = SelfieStatus::parse(r#"{"processed": true, "error": "stale"}"#).unwrap();
        assert_eq!(status.view(), Some(StatusView::Recognized));
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let status = SelfieStatus::parse(r#"{"error": "", "has_selfie": true}"#).unwrap();
        assert_eq!(status.view(), Some(StatusView::Processing));
    }

    #[test]
    fn test_nothing_to_show_leaves_markup() {
        assert_eq!(render(r#"{}"#), None);
        assert_eq!(render(r#"{"processed": false, "has_selfie": false, "error": null}"#), None);
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        assert!(SelfieStatus::parse("<html>502</html>").is_err());
        assert!(SelfieStatus::parse(r#"{"processed": "yes"}"#).is_err());
        assert_eq!(render("not json"), None);
    }

    #[test]
    fn test_error_message_is_escaped() {
        let markup = render(r#"{"error": "<img src=x onerror=alert(1)>"}"#).unwrap();
        assert!(!markup.contains("<img"));
        assert!(markup.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_tone_classes_are_distinct() {
        let tones = [
            StatusView::Recognized.tone_class(),
            StatusView::Failed("e".into()).tone_class(),
            StatusView::Processing.tone_class(),
        ];
        assert_eq!(tones, TONE_CLASSES);
    }
}
