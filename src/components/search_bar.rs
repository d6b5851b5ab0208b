//! Search Bar Component
//!
//! Debounced search input. Keystrokes only reach the topic list once typing
//! pauses for the debounce window; each new keystroke cancels the pending
//! timer, so a burst of input submits exactly one query, the last one.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Pause in typing (ms) before a search fires
const DEBOUNCE_MS: u32 = 250;

/// Query text as submitted to the list loader
fn normalized(value: &str) -> String {
    value.trim().to_string()
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Pending debounce timer; replacing it drops, and so cancels, the old one
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let value = input.value();
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            ctx.submit_query(normalized(&value));
        });
        pending.set_value(Some(timeout));
    };

    view! {
        <input
            type="search"
            id="search"
            placeholder="Search topics..."
            autocomplete="off"
            on:input=on_input
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_whitespace() {
        assert_eq!(normalized("  rust  "), "rust");
        assert_eq!(normalized("\trust async\n"), "rust async");
        assert_eq!(normalized("   "), "");
    }
}
