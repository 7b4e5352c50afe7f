use leptos::prelude::*;

/// Section component - titled block with an anchor link
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="mb-5">
            <h2 class="h4 mb-3">
                {title}
                <a href=anchor_href class="text-decoration-none text-muted ms-2">"\u{00A7}"</a>
            </h2>
            {children()}
        </section>
    }
}
