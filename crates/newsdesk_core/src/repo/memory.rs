//! In-process collaborator implementations.
//!
//! # Responsibility
//! - Hold topics, news resources and one preference snapshot in memory.
//! - Publish every change to live subscribers via `tokio::sync::watch`.
//!
//! # Invariants
//! - Items keep their first-insertion order; re-adding an ID replaces the
//!   record in place.
//! - Subscribers are notified only when stored state actually changes.
//! - Count subscribers see a value only when the total changes.
//! - After `fail`, every current and future subscription yields the error
//!   once and ends.

use crate::error::UpstreamError;
use crate::model::news::{NewsResource, NewsResourceId};
use crate::model::topic::{Topic, TopicId};
use crate::model::user_data::UserPreferenceSnapshot;
use crate::model::user_search::SearchContents;
use crate::model::ModelValidationError;
use crate::repo::{ContentIndex, UserPreferenceStore};
use crate::stream::{stop_after_error, LiveStream};
use futures::future;
use futures::StreamExt;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

fn live_projection<S, T, F>(receiver: watch::Receiver<S>, mut project: F) -> LiveStream<T>
where
    S: Clone + Send + Sync + 'static,
    T: Send + 'static,
    F: FnMut(&S) -> Option<Result<T, UpstreamError>> + Send + 'static,
{
    let projected =
        WatchStream::new(receiver).filter_map(move |state| future::ready(project(&state)));
    stop_after_error(projected).boxed()
}

#[derive(Debug, Clone, Default)]
struct IndexState {
    topics: Vec<Topic>,
    news_resources: Vec<NewsResource>,
    failure: Option<UpstreamError>,
}

impl IndexState {
    fn item_count(&self) -> usize {
        self.topics.len() + self.news_resources.len()
    }

    fn matching(&self, query: &str) -> SearchContents {
        SearchContents {
            topics: self
                .topics
                .iter()
                .filter(|topic| topic.matches(query))
                .cloned()
                .collect(),
            news_resources: self
                .news_resources
                .iter()
                .filter(|resource| resource.matches(query))
                .cloned()
                .collect(),
        }
    }
}

/// Content index kept entirely in memory.
///
/// Cloning yields another handle to the same index.
#[derive(Clone)]
pub struct InMemoryContentIndex {
    state: Arc<watch::Sender<IndexState>>,
}

impl Default for InMemoryContentIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContentIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(IndexState::default());
        Self {
            state: Arc::new(sender),
        }
    }

    /// Adds or replaces topics by ID.
    ///
    /// # Errors
    /// - Rejects the whole batch when any topic fails validation.
    pub fn add_topics(
        &self,
        topics: impl IntoIterator<Item = Topic>,
    ) -> Result<(), ModelValidationError> {
        let topics = topics.into_iter().collect::<Vec<_>>();
        for topic in &topics {
            topic.validate()?;
        }

        let incoming = topics.len();
        let changed = self.state.send_if_modified(|state| {
            let mut changed = false;
            for topic in topics {
                changed |= upsert(&mut state.topics, topic, |item| item.id);
            }
            changed
        });
        debug!(
            "event=index_update module=repo status=ok kind=topics incoming={} changed={}",
            incoming, changed
        );
        Ok(())
    }

    /// Adds or replaces news resources by ID.
    ///
    /// # Errors
    /// - Rejects the whole batch when any resource fails validation.
    pub fn add_news_resources(
        &self,
        news_resources: impl IntoIterator<Item = NewsResource>,
    ) -> Result<(), ModelValidationError> {
        let news_resources = news_resources.into_iter().collect::<Vec<_>>();
        for resource in &news_resources {
            resource.validate()?;
        }

        let incoming = news_resources.len();
        let changed = self.state.send_if_modified(|state| {
            let mut changed = false;
            for resource in news_resources {
                changed |= upsert(&mut state.news_resources, resource, |item| item.id);
            }
            changed
        });
        debug!(
            "event=index_update module=repo status=ok kind=news_resources incoming={} changed={}",
            incoming, changed
        );
        Ok(())
    }

    /// Removes one topic. Returns whether it was present.
    pub fn remove_topic(&self, id: TopicId) -> bool {
        self.state.send_if_modified(|state| {
            let before = state.topics.len();
            state.topics.retain(|topic| topic.id != id);
            state.topics.len() != before
        })
    }

    /// Removes one news resource. Returns whether it was present.
    pub fn remove_news_resource(&self, id: NewsResourceId) -> bool {
        self.state.send_if_modified(|state| {
            let before = state.news_resources.len();
            state.news_resources.retain(|resource| resource.id != id);
            state.news_resources.len() != before
        })
    }

    /// Removes all content.
    pub fn clear(&self) {
        self.state.send_if_modified(|state| {
            let changed = state.item_count() > 0;
            state.topics.clear();
            state.news_resources.clear();
            changed
        });
    }

    /// Terminates every live subscription with `error`.
    pub fn fail(&self, error: UpstreamError) {
        warn!(
            "event=index_fail module=repo status=error source={}",
            error.source_name()
        );
        self.state.send_modify(|state| state.failure = Some(error));
    }

    /// Number of live subscriptions currently attached.
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }
}

impl ContentIndex for InMemoryContentIndex {
    fn count_of(&self) -> LiveStream<usize> {
        // In-place edits notify subscribers without changing the total.
        let mut last_count = None;
        live_projection(self.state.subscribe(), move |state: &IndexState| {
            if let Some(err) = &state.failure {
                return Some(Err(err.clone()));
            }
            let count = state.item_count();
            if last_count == Some(count) {
                return None;
            }
            last_count = Some(count);
            Some(Ok(count))
        })
    }

    fn search_matching(&self, query: &str) -> LiveStream<SearchContents> {
        let query = query.to_string();
        live_projection(self.state.subscribe(), move |state: &IndexState| {
            Some(match &state.failure {
                Some(err) => Err(err.clone()),
                None => Ok(state.matching(&query)),
            })
        })
    }
}

fn upsert<T, K>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) -> bool
where
    T: PartialEq,
    K: PartialEq,
{
    match items.iter().position(|existing| key(existing) == key(&item)) {
        Some(index) if items[index] == item => false,
        Some(index) => {
            items[index] = item;
            true
        }
        None => {
            items.push(item);
            true
        }
    }
}

#[derive(Debug, Clone, Default)]
struct PreferenceState {
    snapshot: Option<UserPreferenceSnapshot>,
    failure: Option<UpstreamError>,
}

/// Preference store kept entirely in memory.
///
/// Emits nothing until the first snapshot is written. Mutators applied
/// before that start from the empty snapshot.
#[derive(Clone)]
pub struct InMemoryUserPreferenceStore {
    state: Arc<watch::Sender<PreferenceState>>,
}

impl Default for InMemoryUserPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserPreferenceStore {
    /// Creates a store with no snapshot yet.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(PreferenceState::default());
        Self {
            state: Arc::new(sender),
        }
    }

    /// Creates a store already holding `snapshot`.
    pub fn with_snapshot(snapshot: UserPreferenceSnapshot) -> Self {
        let store = Self::new();
        store.set_snapshot(snapshot);
        store
    }

    /// Replaces the whole snapshot.
    pub fn set_snapshot(&self, snapshot: UserPreferenceSnapshot) {
        self.state.send_if_modified(|state| {
            if state.snapshot.as_ref() == Some(&snapshot) {
                return false;
            }
            state.snapshot = Some(snapshot);
            true
        });
    }

    /// Replaces the followed topic set.
    pub fn set_followed_topics(&self, topic_ids: impl IntoIterator<Item = TopicId>) {
        let topic_ids = topic_ids.into_iter().collect::<BTreeSet<_>>();
        self.update(move |snapshot| {
            if snapshot.followed_topics == topic_ids {
                return false;
            }
            snapshot.followed_topics = topic_ids;
            true
        });
    }

    pub fn set_topic_followed(&self, topic_id: TopicId, followed: bool) {
        self.update(|snapshot| toggle(&mut snapshot.followed_topics, topic_id, followed));
    }

    pub fn set_news_resource_bookmarked(&self, id: NewsResourceId, bookmarked: bool) {
        self.update(|snapshot| toggle(&mut snapshot.bookmarked_news_resources, id, bookmarked));
    }

    pub fn set_news_resource_viewed(&self, id: NewsResourceId, viewed: bool) {
        self.update(|snapshot| toggle(&mut snapshot.viewed_news_resources, id, viewed));
    }

    /// Returns the stored snapshot, if one was written.
    pub fn snapshot(&self) -> Option<UserPreferenceSnapshot> {
        self.state.borrow().snapshot.clone()
    }

    /// Terminates every live subscription with `error`.
    pub fn fail(&self, error: UpstreamError) {
        warn!(
            "event=preferences_fail module=repo status=error source={}",
            error.source_name()
        );
        self.state.send_modify(|state| state.failure = Some(error));
    }

    /// Number of live subscriptions currently attached.
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    fn update(&self, apply: impl FnOnce(&mut UserPreferenceSnapshot) -> bool) {
        self.state.send_if_modified(|state| {
            // A first write must publish even when it leaves the snapshot empty.
            let first_write = state.snapshot.is_none();
            let snapshot = state.snapshot.get_or_insert_with(UserPreferenceSnapshot::default);
            apply(snapshot) || first_write
        });
    }
}

impl UserPreferenceStore for InMemoryUserPreferenceStore {
    fn current_user(&self) -> LiveStream<UserPreferenceSnapshot> {
        live_projection(self.state.subscribe(), |state: &PreferenceState| {
            match (&state.failure, &state.snapshot) {
                (Some(err), _) => Some(Err(err.clone())),
                (None, Some(snapshot)) => Some(Ok(snapshot.clone())),
                (None, None) => None,
            }
        })
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T, present: bool) -> bool {
    if present {
        set.insert(value)
    } else {
        set.remove(&value)
    }
}
