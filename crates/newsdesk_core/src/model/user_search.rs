//! Query matches and their user-enriched projection.
//!
//! # Responsibility
//! - Carry the raw, ordered matches supplied by the content index.
//! - Derive followed/saved/viewed flags against one preference snapshot.
//!
//! # Invariants
//! - Enriched values wrap content records without modifying them.
//! - Input order is preserved; nothing is re-sorted or dropped.
//! - All flags inside one `UserSearchResult` come from the same snapshot.

use super::news::NewsResource;
use super::topic::{Topic, TopicId};
use super::user_data::UserPreferenceSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw query matches as ordered by the content index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContents {
    pub topics: Vec<Topic>,
    pub news_resources: Vec<NewsResource>,
}

/// Topic plus whether the current user follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowableTopic {
    pub topic: Topic,
    pub is_followed: bool,
}

impl FollowableTopic {
    /// Wraps `topic`, following state taken from `preferences`.
    pub fn new(topic: Topic, preferences: &UserPreferenceSnapshot) -> Self {
        let is_followed = preferences.is_following(&topic.id);
        Self { topic, is_followed }
    }
}

/// News resource plus the current user's saved/viewed state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNewsResource {
    pub news_resource: NewsResource,
    pub is_saved: bool,
    pub has_been_viewed: bool,
    /// Linked topics the user follows.
    pub followed_topic_ids: BTreeSet<TopicId>,
}

impl UserNewsResource {
    /// Wraps `news_resource`, saved/viewed state taken from `preferences`.
    pub fn new(news_resource: NewsResource, preferences: &UserPreferenceSnapshot) -> Self {
        let is_saved = preferences.is_bookmarked(&news_resource.id);
        let has_been_viewed = preferences.is_viewed(&news_resource.id);
        let followed_topic_ids = news_resource
            .topic_ids
            .intersection(&preferences.followed_topics)
            .copied()
            .collect();
        Self {
            news_resource,
            is_saved,
            has_been_viewed,
            followed_topic_ids,
        }
    }
}

/// Enriched, query-matched output delivered to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSearchResult {
    pub topics: Vec<FollowableTopic>,
    pub news_resources: Vec<UserNewsResource>,
}

impl UserSearchResult {
    /// Builds the enriched result from one pair of latest inputs.
    ///
    /// Total over its inputs: empty matches give an empty result.
    pub fn from_contents(
        contents: &SearchContents,
        preferences: &UserPreferenceSnapshot,
    ) -> Self {
        Self {
            topics: contents
                .topics
                .iter()
                .cloned()
                .map(|topic| FollowableTopic::new(topic, preferences))
                .collect(),
            news_resources: contents
                .news_resources
                .iter()
                .cloned()
                .map(|resource| UserNewsResource::new(resource, preferences))
                .collect(),
        }
    }

    /// True when neither topics nor news resources matched.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.news_resources.is_empty()
    }
}
