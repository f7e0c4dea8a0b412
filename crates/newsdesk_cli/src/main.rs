//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire in-memory collaborators into `SearchAggregator` and print one
//!   count and one enriched result for a query.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `newsdesk_cli [query]` (default query `Compose`). Set
//! `NEWSDESK_LOG_DIR` to an absolute directory to enable file logging.

use futures::executor::block_on;
use futures::StreamExt;
use newsdesk_core::{
    core_version, default_log_level, init_logging, InMemoryContentIndex,
    InMemoryUserPreferenceStore, NewsResource, SearchAggregator, Topic, UserPreferenceSnapshot,
};
use std::process::ExitCode;

const DEFAULT_QUERY: &str = "Compose";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("NEWSDESK_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("newsdesk_cli logging_error={err}");
        }
    }

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    match run(&query) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("newsdesk_cli error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("newsdesk_core version={}", core_version());

    let index = InMemoryContentIndex::new();
    let compose = Topic::new(
        "Compose",
        "Declarative UI toolkit",
        "Build native UI with less code and powerful tools.",
    );
    let performance = Topic::new(
        "Performance",
        "App startup and rendering",
        "Measure and improve runtime performance.",
    );
    index.add_topics([compose.clone(), performance.clone()])?;

    let stable = NewsResource::new(
        "Compose reaches stable",
        "The first stable release of Compose is available.",
    )
    .with_topics([compose.id]);
    let baseline = NewsResource::new(
        "Baseline profiles",
        "Faster startup with ahead-of-time compilation hints.",
    )
    .with_topics([performance.id]);
    index.add_news_resources([stable.clone(), baseline])?;

    let mut snapshot = UserPreferenceSnapshot::default();
    snapshot.followed_topics.insert(compose.id);
    snapshot.bookmarked_news_resources.insert(stable.id);
    let preferences = InMemoryUserPreferenceStore::with_snapshot(snapshot);

    let aggregator = SearchAggregator::new(index, preferences);

    let count = block_on(aggregator.count().next()).ok_or(StreamEnded("count"))??;
    println!("count={count}");

    let result = block_on(aggregator.search(query).next()).ok_or(StreamEnded("search"))??;
    println!(
        "query_len={} topics={} news_resources={}",
        query.chars().count(),
        result.topics.len(),
        result.news_resources.len()
    );
    for item in &result.topics {
        println!(
            "topic name={:?} followed={}",
            item.topic.name, item.is_followed
        );
    }
    for item in &result.news_resources {
        println!(
            "news_resource title={:?} saved={} viewed={}",
            item.news_resource.title, item.is_saved, item.has_been_viewed
        );
    }

    Ok(())
}

#[derive(Debug)]
struct StreamEnded(&'static str);

impl std::fmt::Display for StreamEnded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} stream ended without a value", self.0)
    }
}

impl std::error::Error for StreamEnded {}
