//! Topics API Client
//!
//! Thin HTTP wrappers over the server endpoints. Every call returns
//! `Result<T, String>` so components can match and render an inline error
//! state without further propagation.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{TopicDetail, TopicSummary};

fn search_url(query: &str) -> String {
    format!(
        "/api/topics?q={}",
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    )
}

fn topic_url(id: u32) -> String {
    format!("/api/topics/{}", id)
}

fn delete_url(id: u32) -> String {
    format!("/topics/{}/delete", id)
}

/// `GET /api/topics?q=...`: topics matching the query (all topics if empty)
pub async fn search_topics(query: &str) -> Result<Vec<TopicSummary>, String> {
    let resp = Request::get(&search_url(query))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("Request failed: {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// `GET /api/topics/{id}`: one topic with body, timestamps and images
pub async fn get_topic(id: u32) -> Result<TopicDetail, String> {
    let resp = Request::get(&topic_url(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("Request failed: {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// `POST /topics/{id}/delete`: any 2xx is success, anything else an error
pub async fn delete_topic(id: u32) -> Result<(), String> {
    let resp = Request::post(&delete_url(id))
        .header("X-Requested-With", "XMLHttpRequest")
        .header("Content-Type", "application/json")
        .body("{}")
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("Delete failed with status {}", resp.status()));
    }
    Ok(())
}

/// Stale-response guard for loaders whose fetches are never aborted.
///
/// Each fetch takes a token from `issue()`; the response is applied only if
/// the token is still the latest issued, so a slow reply cannot overwrite a
/// newer render.
#[derive(Clone, Default)]
pub struct RequestGuard(Rc<Cell<u64>>);

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next sequence token, invalidating all earlier ones
    pub fn issue(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_escapes_query() {
        assert_eq!(search_url(""), "/api/topics?q=");
        assert_eq!(search_url("rust"), "/api/topics?q=rust");
        assert_eq!(search_url("rust async"), "/api/topics?q=rust%20async");
        assert_eq!(search_url("a&b=c"), "/api/topics?q=a%26b%3Dc");
    }

    #[test]
    fn id_urls() {
        assert_eq!(topic_url(42), "/api/topics/42");
        assert_eq!(delete_url(42), "/topics/42/delete");
    }

    #[test]
    fn guard_latest_token_wins() {
        let guard = RequestGuard::new();
        let first = guard.issue();
        assert!(guard.is_current(first));

        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn guard_clones_share_state() {
        let guard = RequestGuard::new();
        let other = guard.clone();
        let token = guard.issue();
        assert!(other.is_current(token));
        other.issue();
        assert!(!guard.is_current(token));
    }
}
