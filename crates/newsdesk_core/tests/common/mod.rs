#![allow(dead_code)]

use newsdesk_core::{NewsResource, Topic};
use uuid::Uuid;

pub fn id(value: &str) -> Uuid {
    Uuid::parse_str(value).unwrap()
}

/// Mixed topics: the first two mention `Compose`, the last does not.
pub fn topics() -> Vec<Topic> {
    vec![
        Topic::with_id(
            id("00000000-0000-4000-8000-000000000001"),
            "Headlines",
            "News you'll definitely be interested in",
            "The latest events and announcements from the world of Compose.",
        )
        .unwrap(),
        Topic::with_id(
            id("00000000-0000-4000-8000-000000000002"),
            "UI",
            "Compose, layouts and motion",
            "Everything about building modern UI.",
        )
        .unwrap(),
        Topic::with_id(
            id("00000000-0000-4000-8000-000000000003"),
            "Testing",
            "CI and automation",
            "How to write reliable tests (compose in lower case only).",
        )
        .unwrap(),
    ]
}

/// Mixed news: the first two mention `Compose`, the last does not.
pub fn news_resources() -> Vec<NewsResource> {
    let topic_ids = topics().into_iter().map(|topic| topic.id).collect::<Vec<_>>();
    vec![
        NewsResource::with_id(
            id("10000000-0000-4000-8000-000000000001"),
            "Android Basics with Compose",
            "A free course for people with no programming experience.",
        )
        .unwrap()
        .with_topics([topic_ids[1]]),
        NewsResource::with_id(
            id("10000000-0000-4000-8000-000000000002"),
            "Thanks for attending",
            "Recordings of the Compose talks are now online.",
        )
        .unwrap()
        .with_topics([topic_ids[0], topic_ids[1]]),
        NewsResource::with_id(
            id("10000000-0000-4000-8000-000000000003"),
            "Testing on CI",
            "Running instrumented tests on every commit.",
        )
        .unwrap()
        .with_topics([topic_ids[2]]),
    ]
}
