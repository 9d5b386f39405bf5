//! Read-only projections for the presentation layer.
//!
//! The core hands back plain data: the caller owns rendering (markdown,
//! syntax highlighting, breadcrumb separators) and its own selection state.
//! Previews are truncated on `char` boundaries so multi-byte text never
//! splits mid-character.

use serde::Serialize;
use uuid::Uuid;

use crate::model::{Library, Topic};

const TOPIC_PREVIEW_CHARS: usize = 100;
const EXAMPLE_PREVIEW_CHARS: usize = 50;

/// A search hit: one matching topic, display-ready.
#[derive(Debug, Clone, Serialize)]
pub struct TopicHit {
    pub id: Uuid,
    pub title: String,
    pub preview: String,
    pub tags: Vec<String>,
}

/// One ancestor link in a topic's path to its root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbItem {
    pub id: Uuid,
    pub title: String,
}

/// Listing row for a topic's attached examples.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleSummary {
    pub id: Uuid,
    pub name: String,
    pub language: String,
    pub preview: String,
}

/// Search the library and project the matches for display, in the same
/// pre-order as [`Library::search_topics`].
pub fn search_results(library: &Library, query: &str) -> Vec<TopicHit> {
    library
        .search_topics(query)
        .into_iter()
        .map(|topic| TopicHit {
            id: topic.id,
            title: topic.title.clone(),
            preview: preview(&topic.content, TOPIC_PREVIEW_CHARS),
            tags: topic.tags.clone(),
        })
        .collect()
}

/// Ancestor chain for a topic, root first, target last. Empty if the id is
/// unknown.
pub fn breadcrumb(library: &Library, topic_id: Uuid) -> Vec<BreadcrumbItem> {
    library
        .path_to_topic(topic_id)
        .into_iter()
        .map(|topic| BreadcrumbItem {
            id: topic.id,
            title: topic.title.clone(),
        })
        .collect()
}

/// Summaries of the examples attached to one topic, in stored order.
pub fn example_summaries(topic: &Topic) -> Vec<ExampleSummary> {
    topic
        .examples
        .iter()
        .map(|example| ExampleSummary {
            id: example.id,
            name: example.name.clone(),
            language: example.language.clone(),
            preview: preview(&example.content, EXAMPLE_PREVIEW_CHARS),
        })
        .collect()
}

fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() > max_chars {
        let truncated: String = content.chars().take(max_chars).collect();
        format!("{}…", truncated)
    } else {
        content.to_string()
    }
}
