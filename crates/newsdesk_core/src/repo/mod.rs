//! Collaborator contracts consumed by the aggregation service.
//!
//! # Responsibility
//! - Define the live read interfaces of the content index and the user
//!   preference store.
//! - Provide in-process implementations for embedding and tests.
//!
//! # Invariants
//! - Every live stream emits its current value promptly after subscription.
//! - An `Err` item ends a live stream.
//! - Dropping a live stream releases its subscription.

use crate::model::user_data::UserPreferenceSnapshot;
use crate::model::user_search::SearchContents;
use crate::stream::LiveStream;
use std::sync::Arc;

pub mod memory;

/// Read interface of the content search index.
pub trait ContentIndex: Send + Sync {
    /// Live total number of indexable items (topics plus news resources).
    fn count_of(&self) -> LiveStream<usize>;

    /// Live, ordered matches for `query`.
    ///
    /// A topic matches when `query` is a case-sensitive substring of its
    /// name, short description or long description; a news resource matches
    /// on its title or body.
    fn search_matching(&self, query: &str) -> LiveStream<SearchContents>;
}

/// Read interface of the current user's preference state.
pub trait UserPreferenceStore: Send + Sync {
    /// Live preference snapshot of the current user.
    fn current_user(&self) -> LiveStream<UserPreferenceSnapshot>;
}

impl<T: ContentIndex + ?Sized> ContentIndex for Arc<T> {
    fn count_of(&self) -> LiveStream<usize> {
        (**self).count_of()
    }

    fn search_matching(&self, query: &str) -> LiveStream<SearchContents> {
        (**self).search_matching(query)
    }
}

impl<T: UserPreferenceStore + ?Sized> UserPreferenceStore for Arc<T> {
    fn current_user(&self) -> LiveStream<UserPreferenceSnapshot> {
        (**self).current_user()
    }
}
