//! Topic content record.
//!
//! # Responsibility
//! - Hold the descriptive text the index matches queries against.
//!
//! # Invariants
//! - `id` is stable and never reused for another topic.
//! - Records are immutable once handed out by the index.

use super::ModelValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a topic.
pub type TopicId = Uuid;

/// Categorizable subject with descriptive text; indexable and followable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    /// Canonical link to the topic page. Empty when unknown.
    #[serde(default)]
    pub url: String,
    /// Empty when the topic has no artwork.
    #[serde(default)]
    pub image_url: String,
}

impl Topic {
    /// Creates a topic with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        short_description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            short_description: short_description.into(),
            long_description: long_description.into(),
            url: String::new(),
            image_url: String::new(),
        }
    }

    /// Creates a topic with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Errors
    /// - Returns `ModelValidationError::NilId` for the nil UUID.
    pub fn with_id(
        id: TopicId,
        name: impl Into<String>,
        short_description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Result<Self, ModelValidationError> {
        let topic = Self {
            id,
            ..Self::new(name, short_description, long_description)
        };
        topic.validate()?;
        Ok(topic)
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.id.is_nil() {
            return Err(ModelValidationError::NilId { entity: "topic" });
        }
        Ok(())
    }

    /// Returns whether `query` occurs verbatim in the name or either
    /// description.
    ///
    /// Matching is case-sensitive exact containment; an empty query matches.
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query)
            || self.short_description.contains(query)
            || self.long_description.contains(query)
    }
}
