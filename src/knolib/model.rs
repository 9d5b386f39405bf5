//! # Domain Model: Library, Topic, Example
//!
//! The knowledge base is a forest of [`Topic`]s owned by a single [`Library`]
//! document. Each topic owns its sub-topics and its attached [`Example`]
//! snippets outright, so the in-memory shape is strictly a tree: dropping a
//! topic drops its entire subtree.
//!
//! ## Ownership rules
//!
//! - `Topic::parent_id` is a derived value, set by [`Topic::add_child`] (and
//!   cleared by [`Library::add_topic`]). Callers never assign it directly,
//!   which is what keeps the parent/child relation acyclic.
//! - A topic object must not be attached under two parents. Mutation happens
//!   through the owning collection's methods, which bump `updated_at`.
//!
//! ## Wire format
//!
//! Everything serializes to snake_case JSON with RFC-3339 timestamps.
//! Deserialization is forward- and backward-compatible: unknown fields are
//! ignored, and missing optional fields get documented defaults (empty
//! strings and collections, `"text"` for an example's language, the current
//! time for absent timestamps). A timestamp that is *present but malformed*
//! is a parse error — the store treats that as a corrupt document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named code/text snippet attached to a topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Example {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        let language = language.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            content: content.into(),
            language: if language.trim().is_empty() {
                "text".to_string()
            } else {
                language
            },
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// Missing fields default instead of failing; an absent `language` falls back
// to "text" and absent timestamps to the time of the read. Defaults apply
// only when the key is missing: values that are present stay verbatim, empty
// strings included, so reads never rewrite a document.
impl<'de> Deserialize<'de> for Example {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = ExampleHelper::deserialize(deserializer)?;
        let now = Utc::now();

        Ok(Example {
            id: helper.id.unwrap_or_else(Uuid::new_v4),
            name: helper.name,
            content: helper.content,
            language: helper.language.unwrap_or_else(default_language),
            created_at: helper.created_at.unwrap_or(now),
            updated_at: helper.updated_at.unwrap_or(now),
        })
    }
}

#[derive(Deserialize)]
struct ExampleHelper {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

fn default_language() -> String {
    "text".to_string()
}

/// A node in the knowledge hierarchy.
///
/// `is_expanded` is pure UI state (whether the tree view shows the node
/// open); it is persisted for convenience but has no meaning here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub parent_id: Option<Uuid>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_expanded: bool,
    pub children: Vec<Topic>,
    pub examples: Vec<Example>,
}

impl Topic {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: String::new(),
            parent_id: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            is_expanded: false,
            children: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Attach `child` as the last sub-topic. The child's `parent_id` is
    /// rewritten to this topic's id.
    pub fn add_child(&mut self, mut child: Topic) {
        child.parent_id = Some(self.id);
        self.children.push(child);
        self.touch();
    }

    /// Remove the first direct child with the given id. Not recursive.
    pub fn remove_child(&mut self, child_id: Uuid) -> bool {
        if let Some(pos) = self.children.iter().position(|c| c.id == child_id) {
            self.children.remove(pos);
            self.touch();
            true
        } else {
            false
        }
    }

    pub fn add_example(&mut self, example: Example) {
        self.examples.push(example);
        self.touch();
    }

    pub fn remove_example(&mut self, example_id: Uuid) -> bool {
        if let Some(pos) = self.examples.iter().position(|e| e.id == example_id) {
            self.examples.remove(pos);
            self.touch();
            true
        } else {
            false
        }
    }

    pub fn example(&self, example_id: Uuid) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == example_id)
    }

    pub fn example_mut(&mut self, example_id: Uuid) -> Option<&mut Example> {
        self.examples.iter_mut().find(|e| e.id == example_id)
    }

    /// Pre-order lookup within this subtree.
    pub fn find_by_id(&self, id: Uuid) -> Option<&Topic> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: Uuid) -> Option<&mut Topic> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_by_id_mut(id))
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.content.to_lowercase().contains(query_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query_lower))
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = TopicHelper::deserialize(deserializer)?;
        let now = Utc::now();

        Ok(Topic {
            id: helper.id.unwrap_or_else(Uuid::new_v4),
            title: helper.title,
            content: helper.content,
            parent_id: helper.parent_id,
            tags: helper.tags,
            created_at: helper.created_at.unwrap_or(now),
            updated_at: helper.updated_at.unwrap_or(now),
            is_expanded: helper.is_expanded,
            children: helper.children,
            examples: helper.examples,
        })
    }
}

#[derive(Deserialize)]
struct TopicHelper {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    parent_id: Option<Uuid>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    is_expanded: bool,
    #[serde(default)]
    children: Vec<Topic>,
    #[serde(default)]
    examples: Vec<Example>,
}

/// The whole persisted document and root of ownership. Exactly one library
/// is active per process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Library {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub topics: Vec<Topic>,
}

pub const SCHEMA_VERSION: &str = "1.0.0";

impl Library {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            version: SCHEMA_VERSION.to_string(),
            created_at: now,
            updated_at: now,
            topics: Vec::new(),
        }
    }

    /// Add a root topic. Root topics carry no parent back-reference.
    pub fn add_topic(&mut self, mut topic: Topic) {
        topic.parent_id = None;
        self.topics.push(topic);
        self.updated_at = Utc::now();
    }

    /// Remove a root topic by id. Root level only; see [`Self::delete_topic`]
    /// for the recursive variant.
    pub fn remove_topic(&mut self, topic_id: Uuid) -> bool {
        if let Some(pos) = self.topics.iter().position(|t| t.id == topic_id) {
            self.topics.remove(pos);
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    /// Delete a topic anywhere in the forest, subtree and all. Checks the
    /// root level first, then walks every subtree depth-first and stops at
    /// the first removal.
    pub fn delete_topic(&mut self, topic_id: Uuid) -> bool {
        if self.remove_topic(topic_id) {
            return true;
        }

        fn remove_in(topics: &mut [Topic], topic_id: Uuid) -> bool {
            for topic in topics {
                if topic.remove_child(topic_id) {
                    return true;
                }
                if remove_in(&mut topic.children, topic_id) {
                    return true;
                }
            }
            false
        }

        remove_in(&mut self.topics, topic_id)
    }

    /// Pre-order depth-first lookup over the whole forest.
    pub fn find_topic_by_id(&self, topic_id: Uuid) -> Option<&Topic> {
        self.topics.iter().find_map(|t| t.find_by_id(topic_id))
    }

    pub fn find_topic_by_id_mut(&mut self, topic_id: Uuid) -> Option<&mut Topic> {
        self.topics
            .iter_mut()
            .find_map(|t| t.find_by_id_mut(topic_id))
    }

    /// Case-insensitive substring search over title, content and tags, in
    /// pre-order traversal order. An empty or whitespace-only query matches
    /// nothing.
    pub fn search_topics(&self, query: &str) -> Vec<&Topic> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        fn walk<'a>(topic: &'a Topic, query_lower: &str, out: &mut Vec<&'a Topic>) {
            if topic.matches(query_lower) {
                out.push(topic);
            }
            for child in &topic.children {
                walk(child, query_lower, out);
            }
        }

        let mut results = Vec::new();
        for topic in &self.topics {
            walk(topic, &query_lower, &mut results);
        }
        results
    }

    /// Ancestor chain from a root topic down to and including the target,
    /// or empty if the id is not in the forest. Feeds breadcrumb displays.
    pub fn path_to_topic(&self, topic_id: Uuid) -> Vec<&Topic> {
        fn find_path<'a>(topics: &'a [Topic], topic_id: Uuid, path: &mut Vec<&'a Topic>) -> bool {
            for topic in topics {
                path.push(topic);
                if topic.id == topic_id || find_path(&topic.children, topic_id, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        if find_path(&self.topics, topic_id, &mut path) {
            path
        } else {
            Vec::new()
        }
    }
}

impl<'de> Deserialize<'de> for Library {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = LibraryHelper::deserialize(deserializer)?;
        let now = Utc::now();

        Ok(Library {
            id: helper.id.unwrap_or_else(Uuid::new_v4),
            name: helper.name.unwrap_or_else(|| "My Library".to_string()),
            description: helper.description,
            version: helper.version.unwrap_or_else(|| SCHEMA_VERSION.to_string()),
            created_at: helper.created_at.unwrap_or(now),
            updated_at: helper.updated_at.unwrap_or(now),
            topics: helper.topics,
        })
    }
}

#[derive(Deserialize)]
struct LibraryHelper {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    topics: Vec<Topic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library_with_chain() -> (Library, Uuid, Uuid, Uuid) {
        // root -> middle -> leaf
        let mut root = Topic::new("Root");
        let mut middle = Topic::new("Middle");
        let leaf = Topic::new("Leaf");
        let leaf_id = leaf.id;
        let middle_id = middle.id;
        let root_id = root.id;

        middle.add_child(leaf);
        root.add_child(middle);

        let mut lib = Library::new("Test", "");
        lib.add_topic(root);
        (lib, root_id, middle_id, leaf_id)
    }

    #[test]
    fn test_add_child_sets_parent_id() {
        let mut parent = Topic::new("Parent");
        let child = Topic::new("Child");
        let child_id = child.id;

        parent.add_child(child);

        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].id, child_id);
        assert_eq!(parent.children[0].parent_id, Some(parent.id));
    }

    #[test]
    fn test_add_child_bumps_updated_at() {
        let mut parent = Topic::new("Parent");
        let before = parent.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(5));

        parent.add_child(Topic::new("Child"));
        assert!(parent.updated_at > before);
    }

    #[test]
    fn test_add_topic_clears_parent_id() {
        let mut stray = Topic::new("Stray");
        stray.parent_id = Some(Uuid::new_v4());

        let mut lib = Library::new("Test", "");
        lib.add_topic(stray);

        assert_eq!(lib.topics[0].parent_id, None);
    }

    #[test]
    fn test_remove_child_one_level_only() {
        let (mut lib, root_id, _, leaf_id) = library_with_chain();
        let root = lib.find_topic_by_id_mut(root_id).unwrap();

        // leaf is a grandchild, not a direct child of root
        assert!(!root.remove_child(leaf_id));
        assert!(lib.find_topic_by_id(leaf_id).is_some());
    }

    #[test]
    fn test_remove_child_missing_id_is_noop() {
        let mut parent = Topic::new("Parent");
        parent.add_child(Topic::new("Child"));
        let snapshot = parent.clone();

        assert!(!parent.remove_child(Uuid::new_v4()));
        assert_eq!(parent, snapshot);
    }

    #[test]
    fn test_remove_example_missing_id_is_noop() {
        let mut topic = Topic::new("Topic");
        topic.add_example(Example::new("one", "fn main() {}", "rust"));
        let snapshot = topic.clone();

        assert!(!topic.remove_example(Uuid::new_v4()));
        assert_eq!(topic, snapshot);
    }

    #[test]
    fn test_find_topic_at_depth_three() {
        let (lib, _, _, leaf_id) = library_with_chain();
        let found = lib.find_topic_by_id(leaf_id).unwrap();
        assert_eq!(found.title, "Leaf");
    }

    #[test]
    fn test_find_topic_missing_returns_none() {
        let (lib, ..) = library_with_chain();
        assert!(lib.find_topic_by_id(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_delete_topic_root_level() {
        let (mut lib, root_id, ..) = library_with_chain();
        assert!(lib.delete_topic(root_id));
        assert!(lib.topics.is_empty());
    }

    #[test]
    fn test_delete_topic_nested_removes_subtree() {
        let (mut lib, root_id, middle_id, leaf_id) = library_with_chain();

        assert!(lib.delete_topic(middle_id));
        assert!(lib.find_topic_by_id(middle_id).is_none());
        assert!(lib.find_topic_by_id(leaf_id).is_none());
        assert!(lib.find_topic_by_id(root_id).is_some());
    }

    #[test]
    fn test_delete_topic_missing_returns_false() {
        let (mut lib, ..) = library_with_chain();
        let snapshot_titles: Vec<_> = lib.topics.iter().map(|t| t.title.clone()).collect();

        assert!(!lib.delete_topic(Uuid::new_v4()));
        let titles: Vec<_> = lib.topics.iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, snapshot_titles);
    }

    #[test]
    fn test_search_empty_query_matches_nothing() {
        let (lib, ..) = library_with_chain();
        assert!(lib.search_topics("").is_empty());
        assert!(lib.search_topics("   ").is_empty());
    }

    #[test]
    fn test_search_title_content_and_tags() {
        let mut lib = Library::new("Test", "");

        let mut python = Topic::new("Python Temelleri")
            .with_content("Python programlama dili temelleri");
        python.tags.push("programlama".to_string());
        let mut java = Topic::new("Java Basics").with_content("JVM notes");
        java.tags.push("jvm".to_string());

        lib.add_topic(python);
        lib.add_topic(java);

        let hits = lib.search_topics("Python");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Python Temelleri");

        // case-insensitive, also matches content and tags
        assert_eq!(lib.search_topics("python").len(), 1);
        assert_eq!(lib.search_topics("PROGRAMLAMA").len(), 1);
        assert_eq!(lib.search_topics("jvm").len(), 1);
        assert!(lib.search_topics("golang").is_empty());
    }

    #[test]
    fn test_search_is_preorder() {
        let mut root = Topic::new("alpha one");
        root.add_child(Topic::new("alpha two"));
        let mut lib = Library::new("Test", "");
        lib.add_topic(root);
        lib.add_topic(Topic::new("alpha three"));

        let titles: Vec<_> = lib
            .search_topics("alpha")
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["alpha one", "alpha two", "alpha three"]);
    }

    #[test]
    fn test_path_to_topic() {
        let (lib, root_id, middle_id, leaf_id) = library_with_chain();

        let path = lib.path_to_topic(leaf_id);
        let ids: Vec<_> = path.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![root_id, middle_id, leaf_id]);

        assert!(lib.path_to_topic(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_example_language_defaults_to_text() {
        let example = Example::new("snippet", "hello", "");
        assert_eq!(example.language, "text");
    }

    #[test]
    fn test_library_roundtrip_preserves_structure() {
        let (mut lib, _, middle_id, _) = library_with_chain();
        let middle = lib.find_topic_by_id_mut(middle_id).unwrap();
        middle.tags = vec!["b".to_string(), "a".to_string()];
        middle.add_example(Example::new("intro", "print('merhaba dünya')", "python"));

        let json = serde_json::to_string_pretty(&lib).unwrap();
        let loaded: Library = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, lib);
        // tag insertion order survives
        let middle = loaded.find_topic_by_id(middle_id).unwrap();
        assert_eq!(middle.tags, vec!["b", "a"]);
    }

    #[test]
    fn test_pretty_json_keeps_unicode_verbatim() {
        let mut lib = Library::new("Kişisel Kütüphanem", "");
        lib.add_topic(Topic::new("Türkçe Başlık"));

        let json = serde_json::to_string_pretty(&lib).unwrap();
        assert!(json.contains("Kişisel Kütüphanem"));
        assert!(json.contains("Türkçe Başlık"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{
            "name": "Sparse",
            "topics": [
                {
                    "title": "Bare",
                    "examples": [ { "name": "e" } ]
                }
            ]
        }"#;

        let lib: Library = serde_json::from_str(json).unwrap();
        assert_eq!(lib.name, "Sparse");
        assert_eq!(lib.description, "");
        assert_eq!(lib.version, SCHEMA_VERSION);
        assert_eq!(lib.topics.len(), 1);

        let topic = &lib.topics[0];
        assert_eq!(topic.title, "Bare");
        assert!(topic.tags.is_empty());
        assert!(topic.children.is_empty());
        assert!(!topic.is_expanded);
        assert_eq!(topic.examples[0].language, "text");
    }

    #[test]
    fn test_roundtrip_preserves_present_empty_fields() {
        // defaults are for absent keys only; a written empty string must
        // come back as an empty string, not a default
        let mut lib = Library::new("", "");
        lib.version = String::new();

        let mut topic = Topic::new("T");
        let mut example = Example::new("e", "code", "python");
        example.language = String::new();
        topic.add_example(example);
        lib.add_topic(topic);

        let json = serde_json::to_string_pretty(&lib).unwrap();
        let loaded: Library = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, lib);
        assert_eq!(loaded.name, "");
        assert_eq!(loaded.version, "");
        assert_eq!(loaded.topics[0].examples[0].language, "");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "name": "Forward",
            "topics": [],
            "color_scheme": "solarized",
            "pinned": true
        }"#;

        let lib: Library = serde_json::from_str(json).unwrap();
        assert_eq!(lib.name, "Forward");
    }

    #[test]
    fn test_deserialize_rejects_malformed_timestamp() {
        let json = r#"{ "name": "Bad", "created_at": "not-a-date", "topics": [] }"#;
        assert!(serde_json::from_str::<Library>(json).is_err());
    }
}
