//! View Assembly Engine
//!
//! Merges an entity's relations into one consistent snapshot per read
//! operation. The detail view is the only read with a side effect: it
//! bumps the restaurant's view counter through the store's atomic
//! primitive after confirming existence, and the returned snapshot
//! carries the post-increment value.
//!
//! Dangling references (a comment whose author or restaurant has been
//! removed) are tolerated: the affected row is omitted and logged.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use platefeed_storage::{
    Category, CategoryId, Comment, PlatformStore, Restaurant, RestaurantId, User, UserId,
};

use crate::config::ServiceConfig;
use crate::errors::{PlatformError, Result};
use crate::features::views::domain::{
    CommentWithAuthor, DashboardRow, Feed, FeedComment, RestaurantDetail, RestaurantWithCategory,
    UserProfile,
};

pub struct ViewService {
    store: Arc<dyn PlatformStore>,
    config: ServiceConfig,
}

impl ViewService {
    pub fn new<S: PlatformStore + 'static>(store: S) -> Self {
        Self::with_store(Arc::new(store))
    }

    pub fn with_store(store: Arc<dyn PlatformStore>) -> Self {
        Self {
            store,
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    async fn category_of(&self, restaurant: &Restaurant) -> Result<Option<Category>> {
        match restaurant.category_id {
            Some(category_id) => Ok(self.store.get_category(category_id).await?),
            None => Ok(None),
        }
    }

    /// Authors for a batch of comments, keyed by user id.
    async fn authors_of(&self, comments: &[Comment]) -> Result<HashMap<UserId, User>> {
        let mut seen = HashSet::new();
        let author_ids: Vec<UserId> = comments
            .iter()
            .map(|c| c.user_id)
            .filter(|id| seen.insert(*id))
            .collect();
        let authors = self.store.users_by_ids(&author_ids).await?;
        Ok(authors.into_iter().map(|u| (u.id, u)).collect())
    }

    /// Every restaurant joined with its category, id ascending.
    pub async fn list_restaurants(&self) -> Result<Vec<RestaurantWithCategory>> {
        let restaurants = self.store.list_restaurants().await?;
        let categories: HashMap<CategoryId, Category> = self
            .store
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(restaurants
            .into_iter()
            .map(|restaurant| RestaurantWithCategory {
                category: restaurant
                    .category_id
                    .and_then(|id| categories.get(&id).cloned()),
                restaurant,
            })
            .collect())
    }

    /// Detail snapshot for one restaurant.
    ///
    /// Bumps the view counter exactly once; the snapshot's `view_counts`
    /// is the post-increment value.
    pub async fn restaurant_detail(
        &self,
        restaurant_id: RestaurantId,
        viewer: Option<UserId>,
    ) -> Result<RestaurantDetail> {
        self.store
            .get_restaurant(restaurant_id)
            .await?
            .ok_or_else(|| PlatformError::not_found(format!("restaurant {}", restaurant_id)))?;

        // Existence confirmed above; a concurrent delete between the two
        // calls still surfaces as NotFound.
        let restaurant = self
            .store
            .increment_view_count(restaurant_id)
            .await?
            .ok_or_else(|| PlatformError::not_found(format!("restaurant {}", restaurant_id)))?;

        let category = self.category_of(&restaurant).await?;

        let comments = self.store.comments_for_restaurant(restaurant_id).await?;
        let authors = self.authors_of(&comments).await?;
        let comments: Vec<CommentWithAuthor> = comments
            .into_iter()
            .filter_map(|comment| match authors.get(&comment.user_id) {
                Some(author) => Some(CommentWithAuthor {
                    author: author.clone(),
                    comment,
                }),
                None => {
                    warn!(comment_id = comment.id, "comment author missing, row omitted");
                    None
                }
            })
            .collect();

        let favorited: HashSet<UserId> = self
            .store
            .favorited_user_ids(restaurant_id)
            .await?
            .into_iter()
            .collect();
        let liked: HashSet<UserId> = self
            .store
            .liked_user_ids(restaurant_id)
            .await?
            .into_iter()
            .collect();

        let is_favorited = viewer.is_some_and(|v| favorited.contains(&v));
        let is_liked = viewer.is_some_and(|v| liked.contains(&v));

        debug!(
            restaurant_id,
            view_counts = restaurant.view_counts,
            comments = comments.len(),
            "restaurant detail assembled"
        );

        Ok(RestaurantDetail {
            restaurant,
            category,
            comments,
            is_favorited,
            is_liked,
        })
    }

    /// Profile snapshot for one user.
    ///
    /// `comment_count` is the number of distinct restaurants the user
    /// commented on; multiple comments on one restaurant count once.
    pub async fn user_profile(&self, user_id: UserId) -> Result<UserProfile> {
        let user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| PlatformError::not_found(format!("user {}", user_id)))?;

        let favorited_ids = self.store.favorited_restaurant_ids(user_id).await?;
        let favorited_restaurants = self.store.restaurants_by_ids(&favorited_ids).await?;

        let liked_ids = self.store.liked_restaurant_ids(user_id).await?;
        let liked_restaurants = self.store.restaurants_by_ids(&liked_ids).await?;

        let follower_ids = self.store.follower_ids(user_id).await?;
        let followers = self.store.users_by_ids(&follower_ids).await?;

        let following_ids = self.store.following_ids(user_id).await?;
        let followings = self.store.users_by_ids(&following_ids).await?;

        // Dedup commented restaurants by first occurrence over the
        // newest-first comment list.
        let comments = self.store.comments_by_user(user_id).await?;
        let mut seen = HashSet::new();
        let commented_ids: Vec<RestaurantId> = comments
            .iter()
            .map(|c| c.restaurant_id)
            .filter(|id| seen.insert(*id))
            .collect();
        let commented_restaurants = self.store.restaurants_by_ids(&commented_ids).await?;
        let comment_count = commented_restaurants.len();

        debug!(user_id, comment_count, "user profile assembled");

        Ok(UserProfile {
            user,
            favorited_restaurants,
            liked_restaurants,
            followers,
            followings,
            commented_restaurants,
            comment_count,
        })
    }

    /// Flat management record for one restaurant. No side effects.
    pub async fn dashboard(&self, restaurant_id: RestaurantId) -> Result<DashboardRow> {
        let restaurant = self
            .store
            .get_restaurant(restaurant_id)
            .await?
            .ok_or_else(|| PlatformError::not_found(format!("restaurant {}", restaurant_id)))?;

        let category_name = self.category_of(&restaurant).await?.map(|c| c.name);

        Ok(DashboardRow {
            id: restaurant.id,
            name: restaurant.name,
            tel: restaurant.tel,
            address: restaurant.address,
            opening_hours: restaurant.opening_hours,
            description: restaurant.description,
            image: restaurant.image,
            view_counts: restaurant.view_counts,
            category_id: restaurant.category_id,
            category_name,
        })
    }

    /// Activity feed: the newest restaurants and newest comments, two
    /// independent queries with no cross-filtering.
    pub async fn feed(&self) -> Result<Feed> {
        let limit = self.config.feed_limit;

        let recent_restaurants = self.store.recent_restaurants(limit).await?;
        let categories: HashMap<CategoryId, Category> = self
            .store
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let restaurants: Vec<RestaurantWithCategory> = recent_restaurants
            .into_iter()
            .map(|restaurant| RestaurantWithCategory {
                category: restaurant
                    .category_id
                    .and_then(|id| categories.get(&id).cloned()),
                restaurant,
            })
            .collect();

        let recent_comments = self.store.recent_comments(limit).await?;
        let authors = self.authors_of(&recent_comments).await?;

        let mut seen = HashSet::new();
        let restaurant_ids: Vec<RestaurantId> = recent_comments
            .iter()
            .map(|c| c.restaurant_id)
            .filter(|id| seen.insert(*id))
            .collect();
        let subjects: HashMap<RestaurantId, Restaurant> = self
            .store
            .restaurants_by_ids(&restaurant_ids)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let comments: Vec<FeedComment> = recent_comments
            .into_iter()
            .filter_map(|comment| {
                match (
                    authors.get(&comment.user_id),
                    subjects.get(&comment.restaurant_id),
                ) {
                    (Some(author), Some(restaurant)) => Some(FeedComment {
                        author: author.clone(),
                        restaurant: restaurant.clone(),
                        comment,
                    }),
                    _ => {
                        warn!(comment_id = comment.id, "dangling feed comment, row omitted");
                        None
                    }
                }
            })
            .collect();

        Ok(Feed {
            restaurants,
            comments,
        })
    }
}
