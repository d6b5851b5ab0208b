//! UI Components
//!
//! Leptos components for the topics browser.

mod image_modal;
mod search_bar;
mod topic_detail;
mod topic_list;

pub use image_modal::ImageModal;
pub use search_bar::SearchBar;
pub use topic_detail::TopicDetailView;
pub use topic_list::TopicList;
