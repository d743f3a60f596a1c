//! Storage Port (Trait Interface)
//!
//! Port/Adapter pattern for backend flexibility:
//! - Testing: InMemory (fast unit tests)
//! - Persistence: SQLite (zero-config)
//!
//! The port exposes plain reads and writes; the relation and view engines
//! layer their invariants (edge uniqueness, existence preconditions) on
//! top. The one exception is `increment_view_count`, which must be atomic
//! here because a read-modify-write at the application layer could lose
//! concurrent increments.

use async_trait::async_trait;

use super::models::{
    Category, CategoryId, Comment, Favorite, Followship, Like, Restaurant, RestaurantId, User,
    UserId,
};
use crate::error::Result;

/// Platform Store Port (Primary Interface)
///
/// All storage backends must implement this trait.
///
/// Ordering contracts:
/// - `list_*` methods iterate in ascending id order.
/// - "newest first" methods order by (created_at desc, id desc), so the
///   ordering is total even when timestamps collide.
/// - `*_by_ids` methods preserve the request order and skip missing ids.
#[async_trait]
pub trait PlatformStore: Send + Sync {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Users
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Save or update a user
    async fn save_user(&self, user: &User) -> Result<()>;

    /// Get user by ID
    async fn get_user(&self, user_id: UserId) -> Result<Option<User>>;

    /// List all users (id ascending)
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Fetch users by id, preserving request order; missing ids are skipped
    async fn users_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Categories
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Save or update a category
    async fn save_category(&self, category: &Category) -> Result<()>;

    /// Get category by ID
    async fn get_category(&self, category_id: CategoryId) -> Result<Option<Category>>;

    /// List all categories (id ascending)
    async fn list_categories(&self) -> Result<Vec<Category>>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Restaurants
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Save or update a restaurant
    async fn save_restaurant(&self, restaurant: &Restaurant) -> Result<()>;

    /// Get restaurant by ID
    async fn get_restaurant(&self, restaurant_id: RestaurantId) -> Result<Option<Restaurant>>;

    /// List all restaurants (id ascending)
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>>;

    /// Fetch restaurants by id, preserving request order; missing ids are skipped
    async fn restaurants_by_ids(&self, ids: &[RestaurantId]) -> Result<Vec<Restaurant>>;

    /// The `limit` most recently created restaurants, newest first
    async fn recent_restaurants(&self, limit: usize) -> Result<Vec<Restaurant>>;

    /// Atomically bump a restaurant's view counter by one
    ///
    /// Returns the post-increment row, or `None` if the restaurant does
    /// not exist. Concurrent increments must never be lost; backends
    /// serialize the bump (single UPDATE, or a write lock).
    async fn increment_view_count(&self, restaurant_id: RestaurantId)
        -> Result<Option<Restaurant>>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Comments
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Save a comment
    async fn save_comment(&self, comment: &Comment) -> Result<()>;

    /// All comments on a restaurant, newest first
    async fn comments_for_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Comment>>;

    /// All comments authored by a user, newest first
    async fn comments_by_user(&self, user_id: UserId) -> Result<Vec<Comment>>;

    /// The `limit` most recent comments platform-wide, newest first
    async fn recent_comments(&self, limit: usize) -> Result<Vec<Comment>>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Favorite edges
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Insert a favorite edge
    async fn insert_favorite(&self, favorite: &Favorite) -> Result<()>;

    /// Delete the favorite edge for the pair, if present
    async fn delete_favorite(&self, user_id: UserId, restaurant_id: RestaurantId) -> Result<()>;

    /// Look up the favorite edge for the pair
    async fn find_favorite(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Favorite>>;

    /// IDs of users who favorited the restaurant
    async fn favorited_user_ids(&self, restaurant_id: RestaurantId) -> Result<Vec<UserId>>;

    /// IDs of restaurants the user favorited
    async fn favorited_restaurant_ids(&self, user_id: UserId) -> Result<Vec<RestaurantId>>;

    /// Every favorite edge (full scan, feeds the ranking pipeline)
    async fn list_favorites(&self) -> Result<Vec<Favorite>>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Like edges
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Insert a like edge
    async fn insert_like(&self, like: &Like) -> Result<()>;

    /// Delete the like edge for the pair, if present
    async fn delete_like(&self, user_id: UserId, restaurant_id: RestaurantId) -> Result<()>;

    /// Look up the like edge for the pair
    async fn find_like(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Like>>;

    /// IDs of users who liked the restaurant
    async fn liked_user_ids(&self, restaurant_id: RestaurantId) -> Result<Vec<UserId>>;

    /// IDs of restaurants the user liked
    async fn liked_restaurant_ids(&self, user_id: UserId) -> Result<Vec<RestaurantId>>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Followship edges
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Insert a followship edge
    async fn insert_followship(&self, followship: &Followship) -> Result<()>;

    /// Delete the followship edge for the ordered pair, if present
    async fn delete_followship(&self, follower_id: UserId, following_id: UserId) -> Result<()>;

    /// Look up the followship edge for the ordered pair
    async fn find_followship(
        &self,
        follower_id: UserId,
        following_id: UserId,
    ) -> Result<Option<Followship>>;

    /// IDs of users following this user (incoming edges)
    async fn follower_ids(&self, user_id: UserId) -> Result<Vec<UserId>>;

    /// IDs of users this user follows (outgoing edges)
    async fn following_ids(&self, user_id: UserId) -> Result<Vec<UserId>>;

    /// Every followship edge (full scan, feeds the ranking pipeline)
    async fn list_followships(&self) -> Result<Vec<Followship>>;
}
