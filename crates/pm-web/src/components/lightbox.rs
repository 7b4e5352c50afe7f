use leptos::html::Div;
use leptos::prelude::*;

/// Bootstrap modal wrapping a full-size photo.
///
/// Mounted on demand by `openLightbox`; pass `node_ref` to reach the modal element.
#[component]
pub fn Lightbox(
    #[prop(into)] image_url: String,
    #[prop(optional)] node_ref: NodeRef<Div>,
) -> impl IntoView {
    view! {
        <div class="modal fade" tabindex="-1" node_ref=node_ref>
            <div class="modal-dialog modal-xl modal-dialog-centered">
                <div class="modal-content bg-transparent border-0">
                    <div class="text-end p-2">
                        <button
                            type="button"
                            class="btn-close btn-close-white"
                            data-bs-dismiss="modal"
                            aria-label="Закрыть"
                        ></button>
                    </div>
                    <div class="modal-body p-0 text-center">
                        <img src=image_url class="img-fluid" style="max-height: 90vh;" />
                    </div>
                </div>
            </div>
        </div>
    }
}
