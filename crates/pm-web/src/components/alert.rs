use leptos::prelude::*;

/// Dismissible Bootstrap alert.
///
/// Non-permanent alerts close themselves a few seconds after page load.
#[component]
pub fn FlashAlert(
    /// Bootstrap contextual class suffix: `success`, `info`, `warning`, `danger`
    #[prop(into)]
    kind: String,
    #[prop(optional)] permanent: bool,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "alert alert-{} alert-dismissible fade show{}",
        kind,
        if permanent { " alert-permanent" } else { "" }
    );

    view! {
        <div class=class role="alert">
            {children()}
            <button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Закрыть"></button>
        </div>
    }
}
