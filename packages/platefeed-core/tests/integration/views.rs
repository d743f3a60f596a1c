//! View Assembly Integration Tests
//!
//! End-to-end read-model scenarios:
//! 1. View counter monotonicity across repeated detail reads
//! 2. Distinct-restaurant comment counting on the profile
//! 3. Feed assembly with limits
//! 4. Snapshot serialization for the presentation layer
//! 5. The same flows against the SQLite adapter

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use platefeed_core::{RelationService, ServiceConfig, ViewService};
use platefeed_storage::{
    Comment, InMemoryPlatformStore, PlatformStore, Restaurant, SqlitePlatformStore, User,
};

fn ts(secs: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

async fn seed(store: &dyn PlatformStore) {
    store
        .save_user(&User::new(1, "Alice", "alice@example.com", "hash"))
        .await
        .unwrap();
    store
        .save_user(&User::new(2, "Bob", "bob@example.com", "hash"))
        .await
        .unwrap();
    store
        .save_restaurant(&Restaurant::new(1, "Noodle House"))
        .await
        .unwrap();
    store
        .save_restaurant(&Restaurant::new(2, "Taco Stand"))
        .await
        .unwrap();
}

#[tokio::test]
async fn view_counts_form_a_monotonic_sequence() {
    let store = InMemoryPlatformStore::new();
    seed(&store).await;
    let views = ViewService::new(store);

    let mut observed = Vec::new();
    for _ in 0..5 {
        let detail = views.restaurant_detail(1, None).await.unwrap();
        observed.push(detail.restaurant.view_counts);
    }
    assert_eq!(observed, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn profile_comment_count_is_distinct_restaurants() {
    let store = InMemoryPlatformStore::new();
    seed(&store).await;

    // Three comments on restaurant 1, two on restaurant 2.
    for (id, rid, offset) in [(1, 1, 0), (2, 1, 10), (3, 1, 20), (4, 2, 30), (5, 2, 40)] {
        store
            .save_comment(&Comment::new(id, "text", 1, rid).with_created_at(ts(offset)))
            .await
            .unwrap();
    }

    let views = ViewService::new(store);
    let profile = views.user_profile(1).await.unwrap();

    assert_eq!(profile.comment_count, 2);
    let ids: Vec<_> = profile.commented_restaurants.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn feed_lists_are_independent_and_limited() {
    let store = InMemoryPlatformStore::new();
    seed(&store).await;
    store
        .save_comment(&Comment::new(1, "only comment", 2, 1).with_created_at(ts(0)))
        .await
        .unwrap();

    let views = ViewService::new(store).with_config(ServiceConfig::new().with_feed_limit(1));
    let feed = views.feed().await.unwrap();

    // One restaurant (the limit), one comment (all there is). The comment's
    // subject is restaurant 1 regardless of which restaurant leads the list.
    assert_eq!(feed.restaurants.len(), 1);
    assert_eq!(feed.comments.len(), 1);
    assert_eq!(feed.comments[0].restaurant.id, 1);
    assert_eq!(feed.comments[0].author.id, 2);
}

#[tokio::test]
async fn snapshots_serialize_for_the_presentation_layer() {
    let store = InMemoryPlatformStore::new();
    seed(&store).await;

    let relations = RelationService::new(store.clone());
    relations.add_favorite(Some(1), 1).await.unwrap();

    let views = ViewService::new(store);
    let detail = views.restaurant_detail(1, Some(1)).await.unwrap();

    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["restaurant"]["name"], "Noodle House");
    assert_eq!(json["is_favorited"], true);
    assert_eq!(json["is_liked"], false);
    assert_eq!(json["restaurant"]["view_counts"], 1);
}

#[tokio::test]
async fn full_flow_against_sqlite_adapter() {
    let store = SqlitePlatformStore::in_memory().unwrap();
    seed(&store).await;
    store
        .save_comment(&Comment::new(1, "solid bowls", 2, 1).with_created_at(ts(0)))
        .await
        .unwrap();

    let relations = RelationService::new(store.clone());
    relations.add_favorite(Some(1), 1).await.unwrap();
    relations.add_like(Some(2), 1).await.unwrap();
    relations.add_following(Some(1), 2).await.unwrap();

    let views = ViewService::new(store.clone());

    let detail = views.restaurant_detail(1, Some(1)).await.unwrap();
    assert_eq!(detail.restaurant.view_counts, 1);
    assert!(detail.is_favorited);
    assert!(!detail.is_liked);
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].author.name, "Bob");

    let profile = views.user_profile(2).await.unwrap();
    assert_eq!(profile.comment_count, 1);
    assert_eq!(profile.followers[0].id, 1);

    let dashboard = views.dashboard(1).await.unwrap();
    assert_eq!(dashboard.view_counts, 1);
}
