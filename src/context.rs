//! Application Context
//!
//! Shared state provided via Leptos Context API. The remembered search query
//! lives here so the list can be re-fetched with the same query after a
//! delete, instead of in a free-floating global.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Last submitted (debounced, trimmed) search query - read
    pub search_query: ReadSignal<String>,
    /// Last submitted search query - write
    set_search_query: WriteSignal<String>,
    /// Currently selected topic id, if any - read
    pub selected_topic: ReadSignal<Option<u32>>,
    /// Currently selected topic id - write
    set_selected_topic: WriteSignal<Option<u32>>,
    /// Bumped to re-run the list fetch with the remembered query - read
    pub reload_trigger: ReadSignal<u32>,
    /// Reload counter - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        search_query: (ReadSignal<String>, WriteSignal<String>),
        selected_topic: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            search_query: search_query.0,
            set_search_query: search_query.1,
            selected_topic: selected_topic.0,
            set_selected_topic: selected_topic.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Remember a newly submitted search query
    pub fn submit_query(&self, query: String) {
        self.set_search_query.set(query);
    }

    /// Select a topic for the detail pane
    pub fn select(&self, id: u32) {
        self.set_selected_topic.set(Some(id));
    }

    /// Trigger a reload of the topic list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
