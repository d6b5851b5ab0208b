//! Image Modal Component
//!
//! Lightbox overlay driven by a single delegated click listener on the
//! document. Delegation is required: thumbnails live inside detail renders
//! (and potentially inside server-provided body HTML) created long after
//! mount.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[component]
pub fn ImageModal() -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let (src, set_src) = signal(String::new());

    let on_document_click =
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };

            // A thumbnail, or anything inside one, opens the modal with the
            // full-resolution URL, falling back to the thumb's own source
            if let Ok(Some(thumb)) = target.closest(".image-thumb") {
                let full = thumb
                    .get_attribute("data-full")
                    .or_else(|| thumb.get_attribute("src"))
                    .unwrap_or_default();
                set_src.set(full);
                set_visible.set(true);
                ev.prevent_default();
                return;
            }

            // Backdrop or close control hides it; all other clicks are ignored
            let classes = target.class_list();
            if classes.contains("modal") || classes.contains("modal-close") {
                set_visible.set(false);
            }
        });

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if document
            .add_event_listener_with_callback("click", on_document_click.as_ref().unchecked_ref())
            .is_err()
        {
            web_sys::console::error_1(&"[MODAL] failed to attach click listener".into());
        }
    }
    // The listener stays registered for the page lifetime
    on_document_click.forget();

    view! {
        <div id="img-modal" class="modal" class:hidden=move || !visible.get()>
            <span class="modal-close">"×"</span>
            <img id="modal-img" src=move || src.get() />
        </div>
    }
}
