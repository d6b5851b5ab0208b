//! Knowledge Base Frontend App
//!
//! Two-pane layout: search box over the topic list on the left, topic detail
//! on the right, plus the image lightbox overlay.

use leptos::prelude::*;

use crate::components::{ImageModal, SearchBar, TopicDetailView, TopicList};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let search_query = signal(String::new());
    let selected_topic = signal(None::<u32>);
    let reload_trigger = signal(0u32);

    // Provide context to all children. The list's query effect fires once on
    // mount with the initial empty query, which is the initial load.
    provide_context(AppContext::new(search_query, selected_topic, reload_trigger));

    view! {
        <div class="app-layout">
            <aside class="topics-pane">
                <SearchBar />
                <TopicList />
            </aside>

            <main class="detail-pane">
                <TopicDetailView />
            </main>

            <ImageModal />
        </div>
    }
}
