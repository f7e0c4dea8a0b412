use newsdesk_core::{
    ModelValidationError, NewsResource, Topic, UserNewsResource, UserPreferenceSnapshot,
};
use uuid::Uuid;

#[test]
fn topic_new_sets_defaults() {
    let topic = Topic::new("Compose", "UI toolkit", "Declarative UI for Android");

    assert!(!topic.id.is_nil());
    assert_eq!(topic.name, "Compose");
    assert_eq!(topic.short_description, "UI toolkit");
    assert_eq!(topic.long_description, "Declarative UI for Android");
    assert!(topic.url.is_empty());
    assert!(topic.image_url.is_empty());
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Topic::with_id(Uuid::nil(), "a", "b", "c").unwrap_err();
    assert_eq!(err, ModelValidationError::NilId { entity: "topic" });

    let err = NewsResource::with_id(Uuid::nil(), "a", "b").unwrap_err();
    assert_eq!(
        err,
        ModelValidationError::NilId {
            entity: "news_resource"
        }
    );
}

#[test]
fn topic_matches_any_descriptive_field() {
    let topic = Topic::new("Headlines", "Short Compose", "Long text");
    assert!(topic.matches("Compose"));
    assert!(topic.matches("Long"));
    assert!(topic.matches("Headlines"));
    assert!(!topic.matches("compose"));
    assert!(topic.matches(""));
}

#[test]
fn news_resource_matches_title_or_content_only() {
    let mut resource = NewsResource::new("Room 2.6", "Now with Compose support");
    resource.url = "https://example.com/Kotlin".to_string();
    resource.kind = "Article".to_string();

    assert!(resource.matches("Room"));
    assert!(resource.matches("Compose"));
    assert!(!resource.matches("Kotlin"));
    assert!(!resource.matches("Article"));
}

#[test]
fn news_resource_serialization_uses_expected_wire_fields() {
    let resource_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let topic_id = Uuid::parse_str("66666666-7777-4888-9999-aaaaaaaaaaaa").unwrap();
    let mut resource = NewsResource::with_id(resource_id, "Title", "Body")
        .unwrap()
        .with_topics([topic_id]);
    resource.publish_date_ms = 1_700_000_000_000;
    resource.kind = "Video".to_string();

    let json = serde_json::to_value(&resource).unwrap();
    assert_eq!(json["id"], resource_id.to_string());
    assert_eq!(json["title"], "Title");
    assert_eq!(json["content"], "Body");
    assert_eq!(json["publish_date_ms"], 1_700_000_000_000_i64);
    assert_eq!(json["kind"], "Video");
    assert_eq!(json["topic_ids"][0], topic_id.to_string());

    let decoded: NewsResource = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, resource);
}

#[test]
fn snapshot_deserializes_missing_sets_as_empty() {
    let snapshot: UserPreferenceSnapshot = serde_json::from_value(serde_json::json!({
        "followed_topics": ["66666666-7777-4888-9999-aaaaaaaaaaaa"]
    }))
    .unwrap();

    assert!(snapshot.bookmarked_news_resources.is_empty());
    assert!(snapshot.viewed_news_resources.is_empty());
    assert_eq!(snapshot.followed_topics.len(), 1);
}

#[test]
fn user_news_resource_wraps_without_mutating() {
    let resource = NewsResource::new("Title", "Body");
    let mut snapshot = UserPreferenceSnapshot::default();
    snapshot.viewed_news_resources.insert(resource.id);

    let enriched = UserNewsResource::new(resource.clone(), &snapshot);
    assert_eq!(enriched.news_resource, resource);
    assert!(!enriched.is_saved);
    assert!(enriched.has_been_viewed);
}
