//! News resource (article) content record.
//!
//! # Responsibility
//! - Hold article text matched by the index and its topic links.
//!
//! # Invariants
//! - `id` is stable and never reused for another article.
//! - `topic_ids` is a set; link order carries no meaning.

use super::topic::TopicId;
use super::ModelValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Stable identifier of a news resource.
pub type NewsResourceId = Uuid;

/// Content item with title and body; indexable, bookmarkable, viewable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsResource {
    pub id: NewsResourceId,
    pub title: String,
    /// Body text.
    pub content: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub header_image_url: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub publish_date_ms: i64,
    /// Free-form resource kind such as `article` or `video`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub topic_ids: BTreeSet<TopicId>,
}

impl NewsResource {
    /// Creates an article with a generated stable ID and no topic links.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            url: String::new(),
            header_image_url: String::new(),
            publish_date_ms: 0,
            kind: String::new(),
            topic_ids: BTreeSet::new(),
        }
    }

    /// Creates an article with a caller-provided stable ID.
    ///
    /// # Errors
    /// - Returns `ModelValidationError::NilId` for the nil UUID.
    pub fn with_id(
        id: NewsResourceId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ModelValidationError> {
        let resource = Self {
            id,
            ..Self::new(title, content)
        };
        resource.validate()?;
        Ok(resource)
    }

    /// Replaces topic links, builder style.
    pub fn with_topics(mut self, topic_ids: impl IntoIterator<Item = TopicId>) -> Self {
        self.topic_ids = topic_ids.into_iter().collect();
        self
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.id.is_nil() {
            return Err(ModelValidationError::NilId {
                entity: "news_resource",
            });
        }
        Ok(())
    }

    /// Returns whether `query` occurs verbatim in the title or body.
    ///
    /// Matching is case-sensitive exact containment; an empty query matches.
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.content.contains(query)
    }
}
