//! Per-user preference snapshot.

use super::news::NewsResourceId;
use super::topic::TopicId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Atomic view of the current user's saved, viewed and followed identifiers.
///
/// `Default` is the empty snapshot: nothing saved, viewed or followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferenceSnapshot {
    #[serde(default)]
    pub bookmarked_news_resources: BTreeSet<NewsResourceId>,
    #[serde(default)]
    pub viewed_news_resources: BTreeSet<NewsResourceId>,
    #[serde(default)]
    pub followed_topics: BTreeSet<TopicId>,
}

impl UserPreferenceSnapshot {
    /// Whether the news resource is saved.
    pub fn is_bookmarked(&self, id: &NewsResourceId) -> bool {
        self.bookmarked_news_resources.contains(id)
    }

    /// Whether the news resource was opened before.
    pub fn is_viewed(&self, id: &NewsResourceId) -> bool {
        self.viewed_news_resources.contains(id)
    }

    /// Whether the topic is followed.
    pub fn is_following(&self, id: &TopicId) -> bool {
        self.followed_topics.contains(id)
    }
}
