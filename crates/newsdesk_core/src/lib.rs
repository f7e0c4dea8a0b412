//! Core aggregation logic for newsdesk.
//! Merges the live content index with live user preferences into
//! personalized search results and a live content count.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stream;

pub use config::{PreferenceSeed, SearchConfig};
pub use error::UpstreamError;
pub use logging::{default_log_level, init_logging};
pub use model::news::{NewsResource, NewsResourceId};
pub use model::topic::{Topic, TopicId};
pub use model::user_data::UserPreferenceSnapshot;
pub use model::user_search::{
    FollowableTopic, SearchContents, UserNewsResource, UserSearchResult,
};
pub use model::ModelValidationError;
pub use repo::memory::{InMemoryContentIndex, InMemoryUserPreferenceStore};
pub use repo::{ContentIndex, UserPreferenceStore};
pub use service::search_service::SearchAggregator;
pub use stream::LiveStream;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
