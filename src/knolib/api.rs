//! # API Facade
//!
//! [`LibraryApi`] is the single entry point presentation layers call. It is
//! a thin layer over [`FileStore`] and the domain model: it resolves ids,
//! dispatches to the owning collection's operation, and returns plain data.
//! No I/O formatting, no rendering, no selection state — callers keep their
//! own notion of "current topic" and poll these synchronous results.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{KnolibError, Result};
use crate::model::{Example, Library, Topic};
use crate::store::FileStore;
use crate::views::{self, BreadcrumbItem, ExampleSummary, TopicHit};

/// Partial update for an example. `None` fields are left as they are.
#[derive(Debug, Default, Clone)]
pub struct ExampleUpdate {
    pub name: Option<String>,
    pub content: Option<String>,
    pub language: Option<String>,
}

impl ExampleUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none() && self.language.is_none()
    }
}

pub struct LibraryApi {
    store: FileStore,
}

impl LibraryApi {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Convenience constructor: build the store and load the document.
    pub fn open(data_file_path: impl Into<PathBuf>) -> Result<Self> {
        let mut api = Self::new(FileStore::new(data_file_path));
        api.load()?;
        Ok(api)
    }

    pub fn data_file_path(&self) -> &Path {
        self.store.data_file_path()
    }

    pub fn load(&mut self) -> Result<&Library> {
        self.store.load()
    }

    pub fn save(&self) -> Result<()> {
        self.store.save()
    }

    pub fn library(&self) -> Result<&Library> {
        self.store.library().ok_or(KnolibError::NotLoaded)
    }

    pub fn create_backup(&self, backup_path: Option<&Path>) -> Result<PathBuf> {
        self.store.create_backup(backup_path)
    }

    pub fn import_from_file(&mut self, path: &Path) -> Result<()> {
        self.store.import_from_file(path)
    }

    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        self.store.export_to_file(path)
    }

    /// Create a topic, at the root or under `parent_id`. Returns the new id.
    pub fn add_topic(&mut self, title: &str, parent_id: Option<Uuid>) -> Result<Uuid> {
        let library = self.library_mut()?;
        let topic = Topic::new(title);
        let id = topic.id;

        match parent_id {
            Some(pid) => {
                let parent = library
                    .find_topic_by_id_mut(pid)
                    .ok_or(KnolibError::TopicNotFound(pid))?;
                parent.add_child(topic);
            }
            None => library.add_topic(topic),
        }
        Ok(id)
    }

    pub fn update_topic_title(&mut self, topic_id: Uuid, title: &str) -> Result<()> {
        let topic = self.topic_mut(topic_id)?;
        topic.title = title.to_string();
        topic.touch();
        Ok(())
    }

    pub fn update_topic_content(&mut self, topic_id: Uuid, content: &str) -> Result<()> {
        let topic = self.topic_mut(topic_id)?;
        topic.content = content.to_string();
        topic.touch();
        Ok(())
    }

    /// Delete a topic (and its subtree) anywhere in the forest. `Ok(false)`
    /// when the id is unknown — absence is a normal outcome, not an error.
    pub fn delete_topic(&mut self, topic_id: Uuid) -> Result<bool> {
        Ok(self.library_mut()?.delete_topic(topic_id))
    }

    /// Attach a new example to a topic. Returns the new example's id.
    pub fn add_example(
        &mut self,
        topic_id: Uuid,
        name: &str,
        content: &str,
        language: &str,
    ) -> Result<Uuid> {
        let topic = self.topic_mut(topic_id)?;
        let example = Example::new(name, content, language);
        let id = example.id;
        topic.add_example(example);
        Ok(id)
    }

    /// Apply a partial update to an example. `Ok(false)` if the example id
    /// is not attached to the topic.
    pub fn update_example(
        &mut self,
        topic_id: Uuid,
        example_id: Uuid,
        update: ExampleUpdate,
    ) -> Result<bool> {
        let topic = self.topic_mut(topic_id)?;
        let example = match topic.example_mut(example_id) {
            Some(example) => example,
            None => return Ok(false),
        };

        // nothing supplied: the example exists but stays untouched
        if update.is_empty() {
            return Ok(true);
        }

        if let Some(name) = update.name {
            example.name = name;
        }
        if let Some(content) = update.content {
            example.content = content;
        }
        if let Some(language) = update.language {
            example.language = language;
        }
        example.touch();
        Ok(true)
    }

    pub fn delete_example(&mut self, topic_id: Uuid, example_id: Uuid) -> Result<bool> {
        Ok(self.topic_mut(topic_id)?.remove_example(example_id))
    }

    pub fn find_topic(&self, topic_id: Uuid) -> Result<Option<&Topic>> {
        Ok(self.library()?.find_topic_by_id(topic_id))
    }

    pub fn search(&self, query: &str) -> Result<Vec<TopicHit>> {
        Ok(views::search_results(self.library()?, query))
    }

    pub fn breadcrumb(&self, topic_id: Uuid) -> Result<Vec<BreadcrumbItem>> {
        Ok(views::breadcrumb(self.library()?, topic_id))
    }

    pub fn example_summaries(&self, topic_id: Uuid) -> Result<Vec<ExampleSummary>> {
        let topic = self
            .library()?
            .find_topic_by_id(topic_id)
            .ok_or(KnolibError::TopicNotFound(topic_id))?;
        Ok(views::example_summaries(topic))
    }

    fn library_mut(&mut self) -> Result<&mut Library> {
        self.store.library_mut().ok_or(KnolibError::NotLoaded)
    }

    fn topic_mut(&mut self, topic_id: Uuid) -> Result<&mut Topic> {
        self.library_mut()?
            .find_topic_by_id_mut(topic_id)
            .ok_or(KnolibError::TopicNotFound(topic_id))
    }
}
