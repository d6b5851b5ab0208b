//! Topic List Component
//!
//! Fetches and renders the topics matching the current search query. The
//! region always shows exactly one of: loading indicator, empty state, error
//! state, or the topic buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestGuard};
use crate::context::AppContext;
use crate::models::TopicSummary;

#[derive(Clone, PartialEq)]
enum ListState {
    Loading,
    Loaded(Vec<TopicSummary>),
    Failed,
}

#[component]
pub fn TopicList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(ListState::Loading);
    let guard = RequestGuard::new();

    // Re-fetch whenever a new query is submitted or a delete bumps the
    // reload trigger. In-flight fetches are never aborted; the guard drops
    // responses that were superseded while pending.
    Effect::new(move |_| {
        let query = ctx.search_query.get();
        let _ = ctx.reload_trigger.get();
        let token = guard.issue();
        let guard = guard.clone();
        set_state.set(ListState::Loading);
        spawn_local(async move {
            let result = api::search_topics(&query).await;
            if !guard.is_current(token) {
                return;
            }
            match result {
                Ok(topics) => set_state.set(ListState::Loaded(topics)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[LIST] {}", e).into());
                    set_state.set(ListState::Failed);
                }
            }
        });
    });

    view! {
        <div id="topics-list" class="topics-list">
            {move || match state.get() {
                ListState::Loading => view! {
                    <div class="loading-state">"Loading topics…"</div>
                }
                    .into_any(),
                ListState::Failed => view! {
                    <div class="error-state">"Failed to load topics."</div>
                }
                    .into_any(),
                ListState::Loaded(topics) if topics.is_empty() => view! {
                    <div class="empty-state">
                        "No topics found. Try a different search or create a new topic."
                    </div>
                }
                    .into_any(),
                ListState::Loaded(topics) => topics
                    .into_iter()
                    .map(|topic| {
                        let id = topic.id;
                        view! {
                            <button
                                type="button"
                                class="topic-item"
                                class:active=move || ctx.selected_topic.get() == Some(id)
                                data-topic-id=id.to_string()
                                on:click=move |_| ctx.select(id)
                            >
                                <div class="topic-title">{topic.title}</div>
                            </button>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
