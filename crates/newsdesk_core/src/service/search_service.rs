//! Personalized search use cases.
//!
//! # Responsibility
//! - Expose the live indexable-item count.
//! - Merge live query matches with the live preference snapshot into
//!   enriched search results.
//!
//! # Invariants
//! - Every subscription owns its own latest-value cells; nothing is shared
//!   between subscriptions.
//! - Upstream failures are forwarded unchanged and end the output stream.
//! - Results are rebuilt wholesale from one (matches, snapshot) pair.
//! - Logs carry metadata only; query text is never logged.

use crate::config::{PreferenceSeed, SearchConfig};
use crate::error::UpstreamError;
use crate::model::user_data::UserPreferenceSnapshot;
use crate::model::user_search::UserSearchResult;
use crate::repo::{ContentIndex, UserPreferenceStore};
use crate::stream::{combine_latest, stop_after_error, LiveStream};
use futures::StreamExt;
use log::{debug, warn};

/// Aggregates the content index and the preference store.
pub struct SearchAggregator<I: ContentIndex, P: UserPreferenceStore> {
    index: I,
    preferences: P,
    config: SearchConfig,
}

impl<I: ContentIndex, P: UserPreferenceStore> SearchAggregator<I, P> {
    /// Creates an aggregator with default options.
    pub fn new(index: I, preferences: P) -> Self {
        Self::with_config(index, preferences, SearchConfig::default())
    }

    /// Creates an aggregator with explicit options.
    pub fn with_config(index: I, preferences: P, config: SearchConfig) -> Self {
        Self {
            index,
            preferences,
            config,
        }
    }

    /// Options fixed at construction.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Live total of indexable topics and news resources.
    ///
    /// # Contract
    /// - First value reflects the index at subscription time.
    /// - No filtering and no user state involved.
    /// - Ends right after forwarding an index failure.
    pub fn count(&self) -> LiveStream<usize> {
        debug!("event=count_subscribe module=service status=start");
        stop_after_error(self.index.count_of())
            .inspect(|item| log_failure("count", item))
            .boxed()
    }

    /// Live enriched results for `query`.
    ///
    /// Re-emits whenever the matches for `query` or the preference snapshot
    /// change, always pairing the latest value of each. Before the first
    /// snapshot the configured `PreferenceSeed` applies.
    ///
    /// # Contract
    /// - Topic and news resource order is the index's order.
    /// - The empty query is passed to the index as is.
    /// - An empty match is a valid result, not an error.
    /// - Ends right after forwarding a failure from either collaborator.
    pub fn search(&self, query: &str) -> LiveStream<UserSearchResult> {
        debug!(
            "event=search_subscribe module=service status=start query_len={} seed={:?}",
            query.chars().count(),
            self.config.preference_seed
        );

        let combined = combine_latest(
            self.index.search_matching(query),
            self.preferences.current_user(),
            UserSearchResult::from_contents,
        );
        let combined = match self.config.preference_seed {
            PreferenceSeed::AwaitFirstSnapshot => combined,
            PreferenceSeed::EmptySnapshot => {
                combined.with_right_seed(UserPreferenceSnapshot::default())
            }
        };

        combined.inspect(|item| log_failure("search", item)).boxed()
    }
}

fn log_failure<T>(operation: &str, item: &Result<T, UpstreamError>) {
    if let Err(err) = item {
        warn!(
            "event=stream_fail module=service status=error op={} source={} error={}",
            operation,
            err.source_name(),
            err
        );
    }
}
