use leptos::prelude::*;

/// A button that copies text to the clipboard.
/// Renders the `data-copy` hook; the enhancement bundle handles the click and feedback.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Button label (shown before copy)
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <button type="button" data-copy=text class="btn btn-outline-secondary btn-sm">
            <i class="bi bi-clipboard"></i>
            " "
            {label}
        </button>
    }
}
