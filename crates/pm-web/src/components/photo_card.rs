use leptos::prelude::*;

/// Gallery tile: lazily loaded thumbnail that opens the full photo in a lightbox.
#[component]
pub fn PhotoCard(
    #[prop(into)] title: String,
    #[prop(into)] thumbnail: String,
    #[prop(into)] full_size: String,
    #[prop(into)] price: String,
) -> impl IntoView {
    view! {
        <div class="col-6 col-md-4 col-lg-3">
            <div class="card h-100 shadow-sm">
                <a href=full_size.clone() data-lightbox=full_size>
                    <img data-src=thumbnail class="card-img-top" alt=title.clone() />
                </a>
                <div class="card-body d-flex justify-content-between">
                    <span>{title}</span>
                    <strong>{price}</strong>
                </div>
            </div>
        </div>
    }
}
