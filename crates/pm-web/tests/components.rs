//! Server-side rendering of the shared components.

#[cfg(feature = "ssr")]
mod ssr {
    use leptos::prelude::*;
    use pm_web::components::{CopyButton, FlashAlert, Lightbox, PhotoCard};

    fn render<V: IntoView>(view: impl FnOnce() -> V) -> String {
        Owner::new().with(|| view().to_html())
    }

    #[test]
    fn lightbox_wraps_full_size_image_in_modal() {
        let html = render(|| view! { <Lightbox image_url="/media/photo-1.jpg" /> });
        assert!(html.contains("modal fade"));
        assert!(html.contains("modal-xl modal-dialog-centered"));
        assert!(html.contains("data-bs-dismiss=\"modal\""));
        assert!(html.contains("src=\"/media/photo-1.jpg\""));
        assert!(html.contains("max-height: 90vh"));
    }

    #[test]
    fn copy_button_renders_copy_hook() {
        let html = render(|| view! { <CopyButton text="ABC-123" label="Копировать" /> });
        assert!(html.contains("data-copy=\"ABC-123\""));
        assert!(html.contains("Копировать"));
        assert!(!html.contains("onclick"), "Clicks are handled by the bundle, not inline JS");
    }

    #[test]
    fn permanent_alert_is_marked() {
        let permanent = render(|| view! { <FlashAlert kind="info" permanent=true>"stays"</FlashAlert> });
        let transient = render(|| view! { <FlashAlert kind="success">"goes"</FlashAlert> });
        assert!(permanent.contains("alert-permanent"));
        assert!(!transient.contains("alert-permanent"));
        assert!(transient.contains("alert alert-success"));
    }

    #[test]
    fn photo_card_is_lazy_and_opens_lightbox() {
        let html = render(|| {
            view! { <PhotoCard title="Фото #1" thumbnail="/t/1.jpg" full_size="/f/1.jpg" price="150 ₽" /> }
        });
        assert!(html.contains("data-src=\"/t/1.jpg\""));
        assert!(!html.contains(" src=\"/t/1.jpg\""), "Thumbnail must wait for the lazy loader");
        assert!(html.contains("data-lightbox=\"/f/1.jpg\""));
    }
}
