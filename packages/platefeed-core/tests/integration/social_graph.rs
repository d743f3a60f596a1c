//! Social Graph Integration Tests
//!
//! Cross-engine scenarios over one shared store:
//! 1. Favorite toggle → visibility in subsequent reads until removed
//! 2. Double add / double remove → explicit typed failures, no extra edges
//! 3. Popularity ranking → counts, per-viewer flags, limit
//! 4. Followship directionality end to end

use platefeed_core::{PlatformError, RankingService, RelationService, ServiceConfig, ViewService};
use platefeed_storage::{InMemoryPlatformStore, PlatformStore, Restaurant, User};

async fn seeded_store() -> InMemoryPlatformStore {
    let store = InMemoryPlatformStore::new();
    for (id, name) in [(1, "Alice"), (2, "Bob"), (3, "Cara")] {
        store
            .save_user(&User::new(id, name, format!("{}@example.com", name), "hash"))
            .await
            .unwrap();
    }
    for (id, name) in [(1, "Noodle House"), (2, "Taco Stand")] {
        store
            .save_restaurant(&Restaurant::new(id, name))
            .await
            .unwrap();
    }
    store
}

#[tokio::test]
async fn favorite_toggle_is_visible_until_removed() {
    let store = seeded_store().await;
    let relations = RelationService::new(store.clone());
    let views = ViewService::new(store.clone());
    let ranking = RankingService::new(store);

    relations.add_favorite(Some(1), 1).await.unwrap();

    let detail = views.restaurant_detail(1, Some(1)).await.unwrap();
    assert!(detail.is_favorited);

    let top = ranking.top_restaurants(Some(1)).await.unwrap();
    let entry = top.iter().find(|r| r.restaurant.id == 1).unwrap();
    assert!(entry.is_favorited);

    relations.remove_favorite(Some(1), 1).await.unwrap();

    let detail = views.restaurant_detail(1, Some(1)).await.unwrap();
    assert!(!detail.is_favorited);

    let top = ranking.top_restaurants(Some(1)).await.unwrap();
    let entry = top.iter().find(|r| r.restaurant.id == 1).unwrap();
    assert!(!entry.is_favorited);
}

#[tokio::test]
async fn double_add_fails_and_count_rises_by_exactly_one() {
    let store = seeded_store().await;
    let relations = RelationService::new(store.clone());
    let ranking = RankingService::new(store);

    relations.add_favorite(Some(1), 1).await.unwrap();
    let err = relations.add_favorite(Some(1), 1).await.unwrap_err();
    assert!(matches!(err, PlatformError::DuplicateRelation(_)));

    let top = ranking.top_restaurants(None).await.unwrap();
    let entry = top.iter().find(|r| r.restaurant.id == 1).unwrap();
    assert_eq!(entry.favorited_count, 1);
}

#[tokio::test]
async fn remove_without_edge_fails_and_state_is_unchanged() {
    let store = seeded_store().await;
    let relations = RelationService::new(store.clone());

    let err = relations.remove_favorite(Some(1), 1).await.unwrap_err();
    assert!(matches!(err, PlatformError::NotFound(_)));

    assert!(store.list_favorites().await.unwrap().is_empty());
}

#[tokio::test]
async fn ranking_scenario_two_favorites_per_viewer_flags() {
    let store = seeded_store().await;
    let relations = RelationService::new(store.clone());
    let ranking = RankingService::new(store);

    // U1 and U2 both favorite R1.
    relations.add_favorite(Some(1), 1).await.unwrap();
    relations.add_favorite(Some(2), 1).await.unwrap();

    let for_u1 = ranking.top_restaurants(Some(1)).await.unwrap();
    assert_eq!(for_u1[0].restaurant.id, 1);
    assert_eq!(for_u1[0].favorited_count, 2);
    assert!(for_u1[0].is_favorited);

    let for_u3 = ranking.top_restaurants(Some(3)).await.unwrap();
    assert_eq!(for_u3[0].favorited_count, 2);
    assert!(!for_u3[0].is_favorited);
}

#[tokio::test]
async fn ranking_respects_limit_and_restaurant_count() {
    let store = seeded_store().await;
    let ranking =
        RankingService::new(store.clone()).with_config(ServiceConfig::new().with_top_limit(1));

    assert_eq!(ranking.top_restaurants(None).await.unwrap().len(), 1);

    // A limit above the population returns everything, not more.
    let ranking =
        RankingService::new(store).with_config(ServiceConfig::new().with_top_limit(50));
    assert_eq!(ranking.top_restaurants(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn followship_is_directional_across_engines() {
    let store = seeded_store().await;
    let relations = RelationService::new(store.clone());
    let ranking = RankingService::new(store.clone());
    let views = ViewService::new(store);

    relations.add_following(Some(1), 2).await.unwrap();

    // Bob gained a follower; Alice did not.
    let top = ranking.top_users(None).await.unwrap();
    let bob = top.iter().find(|u| u.user.id == 2).unwrap();
    let alice = top.iter().find(|u| u.user.id == 1).unwrap();
    assert_eq!(bob.follower_count, 1);
    assert_eq!(alice.follower_count, 0);

    // is_followed for (Bob, Alice) stays false.
    let for_bob = ranking.top_users(Some(2)).await.unwrap();
    let alice_for_bob = for_bob.iter().find(|u| u.user.id == 1).unwrap();
    assert!(!alice_for_bob.is_followed);

    let alice_profile = views.user_profile(1).await.unwrap();
    assert!(alice_profile.followers.is_empty());
    assert_eq!(alice_profile.followings[0].id, 2);

    let bob_profile = views.user_profile(2).await.unwrap();
    assert_eq!(bob_profile.followers[0].id, 1);
}

#[tokio::test]
async fn like_and_favorite_coexist_on_one_pair() {
    let store = seeded_store().await;
    let relations = RelationService::new(store.clone());
    let views = ViewService::new(store);

    relations.add_favorite(Some(1), 1).await.unwrap();
    relations.add_like(Some(1), 1).await.unwrap();

    let detail = views.restaurant_detail(1, Some(1)).await.unwrap();
    assert!(detail.is_favorited);
    assert!(detail.is_liked);

    relations.remove_like(Some(1), 1).await.unwrap();

    let detail = views.restaurant_detail(1, Some(1)).await.unwrap();
    assert!(detail.is_favorited);
    assert!(!detail.is_liked);
}
