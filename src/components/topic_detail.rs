//! Topic Detail Component
//!
//! Loads the selected topic and renders its header, timestamps, rich-text
//! body and image gallery, plus the delete flow.

use js_sys::Date;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::api::{self, RequestGuard};
use crate::context::AppContext;
use crate::models::TopicDetail;

#[derive(Clone, PartialEq)]
enum DetailState {
    Idle,
    Loading,
    Loaded(TopicDetail),
    Failed,
    Deleted,
}

/// Locale rendering of a server timestamp; invalid input falls through to
/// whatever the JS engine prints for it
fn format_timestamp(raw: &str) -> String {
    let date = Date::new(&JsValue::from_str(raw));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

/// Confirm, then delete the topic and refresh the list with the remembered
/// query. Declining the confirmation issues no request at all.
fn handle_delete(ctx: AppContext, id: u32, set_state: WriteSignal<DetailState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let confirmed = window
        .confirm_with_message(
            "Are you sure you want to delete this topic? This cannot be undone.",
        )
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    spawn_local(async move {
        match api::delete_topic(id).await {
            Ok(()) => {
                set_state.set(DetailState::Deleted);
                ctx.reload();
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[DETAIL] {}", e).into());
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Error deleting topic.");
                }
            }
        }
    });
}

#[component]
pub fn TopicDetailView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(DetailState::Idle);
    let guard = RequestGuard::new();

    // Fetch whenever the selection changes; the guard drops responses that a
    // later selection has superseded.
    Effect::new(move |_| {
        let Some(id) = ctx.selected_topic.get() else {
            return;
        };
        let token = guard.issue();
        let guard = guard.clone();
        set_state.set(DetailState::Loading);
        spawn_local(async move {
            let result = api::get_topic(id).await;
            if !guard.is_current(token) {
                return;
            }
            match result {
                Ok(topic) => set_state.set(DetailState::Loaded(topic)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[DETAIL] {}", e).into());
                    set_state.set(DetailState::Failed);
                }
            }
        });
    });

    view! {
        <div id="topic-detail" class="topic-detail">
            {move || match state.get() {
                DetailState::Idle => view! {
                    <div class="empty-state">"Select a topic to view it here."</div>
                }
                    .into_any(),
                DetailState::Loading => view! {
                    <div class="loading-state">"Loading topic…"</div>
                }
                    .into_any(),
                DetailState::Failed => view! {
                    <div class="error-state">"Failed to load topic."</div>
                }
                    .into_any(),
                DetailState::Deleted => view! {
                    <div class="empty-state">
                        "Topic deleted. Select another topic or create a new one."
                    </div>
                }
                    .into_any(),
                DetailState::Loaded(topic) => {
                    let id = topic.id;
                    let edit_href = format!("/topics/{}/edit", id);
                    let created = format_timestamp(&topic.created_at);
                    let updated = format_timestamp(&topic.updated_at);
                    let images = topic.images;
                    view! {
                        <article>
                            <div class="topic-detail-header">
                                <h2 class="topic-detail-title">{topic.title}</h2>
                                <div class="topic-detail-actions">
                                    <a href=edit_href class="btn small">"Edit"</a>
                                    <button
                                        type="button"
                                        class="btn small danger"
                                        on:click=move |_| handle_delete(ctx, id, set_state)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>

                            <div class="topic-meta">
                                <span>{format!("Created: {}", created)}</span>
                                <span>{format!("Last updated: {}", updated)}</span>
                            </div>

                            // Server-side sanitized rich text, rendered as-is
                            <div class="topic-body" inner_html=topic.body></div>

                            {(!images.is_empty())
                                .then(|| view! {
                                    <h3 style="margin-top: 24px; margin-bottom: 8px;">
                                        "Images"
                                    </h3>
                                    <div class="image-gallery">
                                        {images
                                            .into_iter()
                                            .map(|img| view! {
                                                <div class="image-card">
                                                    <img
                                                        src=img.url.clone()
                                                        class="image-thumb"
                                                        data-full=img.url.clone()
                                                    />
                                                    <div class="image-title">
                                                        {img.label().to_string()}
                                                    </div>
                                                </div>
                                            })
                                            .collect_view()}
                                    </div>
                                })}
                        </article>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn formats_valid_iso_timestamp() {
        let formatted = format_timestamp("2024-03-01T10:00:00");
        assert!(!formatted.is_empty());
        assert_ne!(formatted, "Invalid Date");
    }
}
