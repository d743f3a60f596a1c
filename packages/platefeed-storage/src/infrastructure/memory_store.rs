//! In-Memory Platform Store (for testing)
//!
//! BTreeMap-backed implementation for unit tests and local development.
//! Entity tables use BTreeMap so iteration is id-ascending, which keeps
//! ranking tie-breaks deterministic. NOT for production use.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::models::{
    Category, CategoryId, Comment, CommentId, Favorite, Followship, Like, Restaurant,
    RestaurantId, User, UserId,
};
use crate::domain::ports::PlatformStore;
use crate::error::Result;

#[derive(Clone, Default)]
pub struct InMemoryPlatformStore {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    categories: Arc<RwLock<BTreeMap<CategoryId, Category>>>,
    restaurants: Arc<RwLock<BTreeMap<RestaurantId, Restaurant>>>,
    comments: Arc<RwLock<BTreeMap<CommentId, Comment>>>,
    favorites: Arc<RwLock<Vec<Favorite>>>,
    likes: Arc<RwLock<Vec<Like>>>,
    followships: Arc<RwLock<Vec<Followship>>>,
}

impl InMemoryPlatformStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first: created_at descending, id descending as the tiebreak.
fn sort_newest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl PlatformStore for InMemoryPlatformStore {
    async fn save_user(&self, user: &User) -> Result<()> {
        self.users.write()?.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: UserId) -> Result<Option<User>> {
        Ok(self.users.read()?.get(&user_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read()?.values().cloned().collect())
    }

    async fn users_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>> {
        let users = self.users.read()?;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn save_category(&self, category: &Category) -> Result<()> {
        self.categories
            .write()?
            .insert(category.id, category.clone());
        Ok(())
    }

    async fn get_category(&self, category_id: CategoryId) -> Result<Option<Category>> {
        Ok(self.categories.read()?.get(&category_id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.read()?.values().cloned().collect())
    }

    async fn save_restaurant(&self, restaurant: &Restaurant) -> Result<()> {
        self.restaurants
            .write()?
            .insert(restaurant.id, restaurant.clone());
        Ok(())
    }

    async fn get_restaurant(&self, restaurant_id: RestaurantId) -> Result<Option<Restaurant>> {
        Ok(self.restaurants.read()?.get(&restaurant_id).cloned())
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        Ok(self.restaurants.read()?.values().cloned().collect())
    }

    async fn restaurants_by_ids(&self, ids: &[RestaurantId]) -> Result<Vec<Restaurant>> {
        let restaurants = self.restaurants.read()?;
        Ok(ids
            .iter()
            .filter_map(|id| restaurants.get(id).cloned())
            .collect())
    }

    async fn recent_restaurants(&self, limit: usize) -> Result<Vec<Restaurant>> {
        let mut restaurants: Vec<Restaurant> =
            self.restaurants.read()?.values().cloned().collect();
        restaurants.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        restaurants.truncate(limit);
        Ok(restaurants)
    }

    async fn increment_view_count(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Restaurant>> {
        // The bump happens under the table's write lock, so concurrent
        // increments serialize and none is lost.
        let mut restaurants = self.restaurants.write()?;
        Ok(restaurants.get_mut(&restaurant_id).map(|restaurant| {
            restaurant.view_counts += 1;
            restaurant.clone()
        }))
    }

    async fn save_comment(&self, comment: &Comment) -> Result<()> {
        self.comments.write()?.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn comments_for_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()?
            .values()
            .filter(|c| c.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        sort_newest_first(&mut comments);
        Ok(comments)
    }

    async fn comments_by_user(&self, user_id: UserId) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()?
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut comments);
        Ok(comments)
    }

    async fn recent_comments(&self, limit: usize) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self.comments.read()?.values().cloned().collect();
        sort_newest_first(&mut comments);
        comments.truncate(limit);
        Ok(comments)
    }

    async fn insert_favorite(&self, favorite: &Favorite) -> Result<()> {
        self.favorites.write()?.push(favorite.clone());
        Ok(())
    }

    async fn delete_favorite(&self, user_id: UserId, restaurant_id: RestaurantId) -> Result<()> {
        self.favorites
            .write()?
            .retain(|f| !(f.user_id == user_id && f.restaurant_id == restaurant_id));
        Ok(())
    }

    async fn find_favorite(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Favorite>> {
        Ok(self
            .favorites
            .read()?
            .iter()
            .find(|f| f.user_id == user_id && f.restaurant_id == restaurant_id)
            .cloned())
    }

    async fn favorited_user_ids(&self, restaurant_id: RestaurantId) -> Result<Vec<UserId>> {
        Ok(self
            .favorites
            .read()?
            .iter()
            .filter(|f| f.restaurant_id == restaurant_id)
            .map(|f| f.user_id)
            .collect())
    }

    async fn favorited_restaurant_ids(&self, user_id: UserId) -> Result<Vec<RestaurantId>> {
        Ok(self
            .favorites
            .read()?
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.restaurant_id)
            .collect())
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>> {
        Ok(self.favorites.read()?.clone())
    }

    async fn insert_like(&self, like: &Like) -> Result<()> {
        self.likes.write()?.push(like.clone());
        Ok(())
    }

    async fn delete_like(&self, user_id: UserId, restaurant_id: RestaurantId) -> Result<()> {
        self.likes
            .write()?
            .retain(|l| !(l.user_id == user_id && l.restaurant_id == restaurant_id));
        Ok(())
    }

    async fn find_like(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Like>> {
        Ok(self
            .likes
            .read()?
            .iter()
            .find(|l| l.user_id == user_id && l.restaurant_id == restaurant_id)
            .cloned())
    }

    async fn liked_user_ids(&self, restaurant_id: RestaurantId) -> Result<Vec<UserId>> {
        Ok(self
            .likes
            .read()?
            .iter()
            .filter(|l| l.restaurant_id == restaurant_id)
            .map(|l| l.user_id)
            .collect())
    }

    async fn liked_restaurant_ids(&self, user_id: UserId) -> Result<Vec<RestaurantId>> {
        Ok(self
            .likes
            .read()?
            .iter()
            .filter(|l| l.user_id == user_id)
            .map(|l| l.restaurant_id)
            .collect())
    }

    async fn insert_followship(&self, followship: &Followship) -> Result<()> {
        self.followships.write()?.push(followship.clone());
        Ok(())
    }

    async fn delete_followship(&self, follower_id: UserId, following_id: UserId) -> Result<()> {
        self.followships
            .write()?
            .retain(|f| !(f.follower_id == follower_id && f.following_id == following_id));
        Ok(())
    }

    async fn find_followship(
        &self,
        follower_id: UserId,
        following_id: UserId,
    ) -> Result<Option<Followship>> {
        Ok(self
            .followships
            .read()?
            .iter()
            .find(|f| f.follower_id == follower_id && f.following_id == following_id)
            .cloned())
    }

    async fn follower_ids(&self, user_id: UserId) -> Result<Vec<UserId>> {
        Ok(self
            .followships
            .read()?
            .iter()
            .filter(|f| f.following_id == user_id)
            .map(|f| f.follower_id)
            .collect())
    }

    async fn following_ids(&self, user_id: UserId) -> Result<Vec<UserId>> {
        Ok(self
            .followships
            .read()?
            .iter()
            .filter(|f| f.follower_id == user_id)
            .map(|f| f.following_id)
            .collect())
    }

    async fn list_followships(&self) -> Result<Vec<Followship>> {
        Ok(self.followships.read()?.clone())
    }
}
