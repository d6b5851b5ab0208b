//! Frontend Models
//!
//! View-model structures matching the server's JSON payloads. All of these
//! are transient: re-fetched on every render, never cached.

use serde::{Deserialize, Serialize};

/// Topic list projection returned by `GET /api/topics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: u32,
    pub title: String,
}

/// Full topic returned by `GET /api/topics/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDetail {
    pub id: u32,
    pub title: String,
    /// Rich-text HTML, sanitized server-side and rendered as-is
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub images: Vec<TopicImage>,
}

/// Gallery entry attached to a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicImage {
    pub url: String,
    /// Untitled images come back as `null` or `""`; both render an empty label
    pub title: Option<String>,
}

impl TopicImage {
    /// Label shown under the thumbnail
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_summary_list() {
        let json = r#"[{"id":1,"title":"First"},{"id":2,"title":"Second"}]"#;
        let topics: Vec<TopicSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].id, 1);
        assert_eq!(topics[1].title, "Second");
    }

    #[test]
    fn decodes_detail_with_images() {
        let json = r#"{
            "id": 7,
            "title": "Ferrite cores",
            "body": "<p>Notes</p>",
            "created_at": "2024-03-01T10:00:00",
            "updated_at": "2024-03-02T11:30:00",
            "images": [
                {"url": "/static/uploads/a.png", "title": "Core A"},
                {"url": "/static/uploads/b.png", "title": null}
            ]
        }"#;
        let topic: TopicDetail = serde_json::from_str(json).unwrap();
        assert_eq!(topic.id, 7);
        assert_eq!(topic.images.len(), 2);
        assert_eq!(topic.images[0].label(), "Core A");
        assert_eq!(topic.images[1].label(), "");
    }

    #[test]
    fn decodes_detail_without_images_field() {
        let json = r#"{
            "id": 3,
            "title": "Bare",
            "body": "",
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        }"#;
        let topic: TopicDetail = serde_json::from_str(json).unwrap();
        assert!(topic.images.is_empty());
    }

    #[test]
    fn empty_string_title_renders_empty_label() {
        let img: TopicImage =
            serde_json::from_str(r#"{"url":"/x.png","title":""}"#).unwrap();
        assert_eq!(img.label(), "");
    }
}
