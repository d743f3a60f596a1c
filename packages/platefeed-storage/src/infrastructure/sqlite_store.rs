//! SQLite Platform Store
//!
//! File-based persistent storage using SQLite.
//! Suitable for local development and single-node deployments.
//!
//! Schema notes:
//! - Edge tables (favorites, likes, followships) carry a composite primary
//!   key on their endpoint pair, so pair uniqueness holds even under the
//!   relation engine's unsynchronized check-then-insert.
//! - Timestamps are stored as epoch milliseconds; newest-first queries
//!   order by (created_at DESC, id DESC) so the ordering stays total.
//! - The view counter is bumped with a single UPDATE, serialized by the
//!   database, never read-modify-written by callers.

use async_trait::async_trait;
use chrono::DateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::domain::models::{
    Category, CategoryId, Comment, Favorite, Followship, Like, Restaurant, RestaurantId, User,
    UserId,
};
use crate::domain::ports::PlatformStore;
use crate::error::Result;

/// SQLite-based PlatformStore implementation
#[derive(Clone)]
pub struct SqlitePlatformStore {
    conn: Arc<Mutex<Connection>>,
}

fn millis(ts: chrono::DateTime<chrono::Utc>) -> i64 {
    ts.timestamp_millis()
}

fn from_millis(ms: i64) -> chrono::DateTime<chrono::Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        image: row.get(4)?,
        created_at: from_millis(row.get(5)?),
        updated_at: from_millis(row.get(6)?),
    })
}

fn restaurant_from_row(row: &Row) -> rusqlite::Result<Restaurant> {
    Ok(Restaurant {
        id: row.get(0)?,
        name: row.get(1)?,
        tel: row.get(2)?,
        address: row.get(3)?,
        opening_hours: row.get(4)?,
        description: row.get(5)?,
        image: row.get(6)?,
        view_counts: row.get::<_, i64>(7)? as u64,
        category_id: row.get(8)?,
        created_at: from_millis(row.get(9)?),
        updated_at: from_millis(row.get(10)?),
    })
}

fn comment_from_row(row: &Row) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        text: row.get(1)?,
        user_id: row.get(2)?,
        restaurant_id: row.get(3)?,
        created_at: from_millis(row.get(4)?),
    })
}

const USER_COLS: &str = "id, name, email, password_hash, image, created_at, updated_at";
const RESTAURANT_COLS: &str = "id, name, tel, address, opening_hours, description, image, \
     view_counts, category_id, created_at, updated_at";
const COMMENT_COLS: &str = "id, text, user_id, restaurant_id, created_at";

impl SqlitePlatformStore {
    /// Create a new SQLite store at the given path
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory SQLite store (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                image TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS restaurants (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                tel TEXT,
                address TEXT,
                opening_hours TEXT,
                description TEXT,
                image TEXT,
                view_counts INTEGER NOT NULL DEFAULT 0,
                category_id INTEGER,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (category_id) REFERENCES categories(id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS comments (
                id INTEGER PRIMARY KEY,
                text TEXT NOT NULL,
                user_id INTEGER NOT NULL,
                restaurant_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id),
                FOREIGN KEY (restaurant_id) REFERENCES restaurants(id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_comments_restaurant
             ON comments(restaurant_id, created_at)",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_comments_user
             ON comments(user_id, created_at)",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS favorites (
                user_id INTEGER NOT NULL,
                restaurant_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (user_id, restaurant_id),
                FOREIGN KEY (user_id) REFERENCES users(id),
                FOREIGN KEY (restaurant_id) REFERENCES restaurants(id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS likes (
                user_id INTEGER NOT NULL,
                restaurant_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (user_id, restaurant_id),
                FOREIGN KEY (user_id) REFERENCES users(id),
                FOREIGN KEY (restaurant_id) REFERENCES restaurants(id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS followships (
                follower_id INTEGER NOT NULL,
                following_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (follower_id, following_id),
                FOREIGN KEY (follower_id) REFERENCES users(id),
                FOREIGN KEY (following_id) REFERENCES users(id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_followships_following
             ON followships(following_id)",
            [],
        )?;

        Ok(())
    }
}

#[async_trait]
impl PlatformStore for SqlitePlatformStore {
    async fn save_user(&self, user: &User) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO users (id, name, email, password_hash, image, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                user.id,
                &user.name,
                &user.email,
                &user.password_hash,
                &user.image,
                millis(user.created_at),
                millis(user.updated_at)
            ],
        )?;
        Ok(())
    }

    async fn get_user(&self, user_id: UserId) -> Result<Option<User>> {
        let conn = self.conn.lock()?;
        let result = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE id = ?1", USER_COLS),
                params![user_id],
                user_from_row,
            )
            .optional()?;
        Ok(result)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM users ORDER BY id", USER_COLS))?;
        let users = stmt
            .query_map([], user_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    async fn users_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM users WHERE id = ?1", USER_COLS))?;
        let mut users = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(user) = stmt.query_row(params![id], user_from_row).optional()? {
                users.push(user);
            }
        }
        Ok(users)
    }

    async fn save_category(&self, category: &Category) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO categories (id, name) VALUES (?1, ?2)",
            params![category.id, &category.name],
        )?;
        Ok(())
    }

    async fn get_category(&self, category_id: CategoryId) -> Result<Option<Category>> {
        let conn = self.conn.lock()?;
        let result = conn
            .query_row(
                "SELECT id, name FROM categories WHERE id = ?1",
                params![category_id],
                |row| {
                    Ok(Category {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(result)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(categories)
    }

    async fn save_restaurant(&self, restaurant: &Restaurant) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO restaurants
             (id, name, tel, address, opening_hours, description, image, view_counts, category_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                restaurant.id,
                &restaurant.name,
                &restaurant.tel,
                &restaurant.address,
                &restaurant.opening_hours,
                &restaurant.description,
                &restaurant.image,
                restaurant.view_counts as i64,
                restaurant.category_id,
                millis(restaurant.created_at),
                millis(restaurant.updated_at)
            ],
        )?;
        Ok(())
    }

    async fn get_restaurant(&self, restaurant_id: RestaurantId) -> Result<Option<Restaurant>> {
        let conn = self.conn.lock()?;
        let result = conn
            .query_row(
                &format!("SELECT {} FROM restaurants WHERE id = ?1", RESTAURANT_COLS),
                params![restaurant_id],
                restaurant_from_row,
            )
            .optional()?;
        Ok(result)
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM restaurants ORDER BY id",
            RESTAURANT_COLS
        ))?;
        let restaurants = stmt
            .query_map([], restaurant_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(restaurants)
    }

    async fn restaurants_by_ids(&self, ids: &[RestaurantId]) -> Result<Vec<Restaurant>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM restaurants WHERE id = ?1",
            RESTAURANT_COLS
        ))?;
        let mut restaurants = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(restaurant) = stmt
                .query_row(params![id], restaurant_from_row)
                .optional()?
            {
                restaurants.push(restaurant);
            }
        }
        Ok(restaurants)
    }

    async fn recent_restaurants(&self, limit: usize) -> Result<Vec<Restaurant>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM restaurants ORDER BY created_at DESC, id DESC LIMIT ?1",
            RESTAURANT_COLS
        ))?;
        let restaurants = stmt
            .query_map(params![limit as i64], restaurant_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(restaurants)
    }

    async fn increment_view_count(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Restaurant>> {
        let conn = self.conn.lock()?;
        let updated = conn.execute(
            "UPDATE restaurants SET view_counts = view_counts + 1 WHERE id = ?1",
            params![restaurant_id],
        )?;
        if updated == 0 {
            return Ok(None);
        }
        let result = conn
            .query_row(
                &format!("SELECT {} FROM restaurants WHERE id = ?1", RESTAURANT_COLS),
                params![restaurant_id],
                restaurant_from_row,
            )
            .optional()?;
        Ok(result)
    }

    async fn save_comment(&self, comment: &Comment) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO comments (id, text, user_id, restaurant_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                comment.id,
                &comment.text,
                comment.user_id,
                comment.restaurant_id,
                millis(comment.created_at)
            ],
        )?;
        Ok(())
    }

    async fn comments_for_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Comment>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM comments WHERE restaurant_id = ?1 ORDER BY created_at DESC, id DESC",
            COMMENT_COLS
        ))?;
        let comments = stmt
            .query_map(params![restaurant_id], comment_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(comments)
    }

    async fn comments_by_user(&self, user_id: UserId) -> Result<Vec<Comment>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM comments WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
            COMMENT_COLS
        ))?;
        let comments = stmt
            .query_map(params![user_id], comment_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(comments)
    }

    async fn recent_comments(&self, limit: usize) -> Result<Vec<Comment>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM comments ORDER BY created_at DESC, id DESC LIMIT ?1",
            COMMENT_COLS
        ))?;
        let comments = stmt
            .query_map(params![limit as i64], comment_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(comments)
    }

    async fn insert_favorite(&self, favorite: &Favorite) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT INTO favorites (user_id, restaurant_id, created_at) VALUES (?1, ?2, ?3)",
            params![
                favorite.user_id,
                favorite.restaurant_id,
                millis(favorite.created_at)
            ],
        )?;
        Ok(())
    }

    async fn delete_favorite(&self, user_id: UserId, restaurant_id: RestaurantId) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "DELETE FROM favorites WHERE user_id = ?1 AND restaurant_id = ?2",
            params![user_id, restaurant_id],
        )?;
        Ok(())
    }

    async fn find_favorite(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Favorite>> {
        let conn = self.conn.lock()?;
        let result = conn
            .query_row(
                "SELECT user_id, restaurant_id, created_at FROM favorites
                 WHERE user_id = ?1 AND restaurant_id = ?2",
                params![user_id, restaurant_id],
                |row| {
                    Ok(Favorite {
                        user_id: row.get(0)?,
                        restaurant_id: row.get(1)?,
                        created_at: from_millis(row.get(2)?),
                    })
                },
            )
            .optional()?;
        Ok(result)
    }

    async fn favorited_user_ids(&self, restaurant_id: RestaurantId) -> Result<Vec<UserId>> {
        let conn = self.conn.lock()?;
        let mut stmt =
            conn.prepare("SELECT user_id FROM favorites WHERE restaurant_id = ?1")?;
        let ids = stmt
            .query_map(params![restaurant_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    async fn favorited_restaurant_ids(&self, user_id: UserId) -> Result<Vec<RestaurantId>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT restaurant_id FROM favorites WHERE user_id = ?1")?;
        let ids = stmt
            .query_map(params![user_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT user_id, restaurant_id, created_at FROM favorites")?;
        let favorites = stmt
            .query_map([], |row| {
                Ok(Favorite {
                    user_id: row.get(0)?,
                    restaurant_id: row.get(1)?,
                    created_at: from_millis(row.get(2)?),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(favorites)
    }

    async fn insert_like(&self, like: &Like) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT INTO likes (user_id, restaurant_id, created_at) VALUES (?1, ?2, ?3)",
            params![like.user_id, like.restaurant_id, millis(like.created_at)],
        )?;
        Ok(())
    }

    async fn delete_like(&self, user_id: UserId, restaurant_id: RestaurantId) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "DELETE FROM likes WHERE user_id = ?1 AND restaurant_id = ?2",
            params![user_id, restaurant_id],
        )?;
        Ok(())
    }

    async fn find_like(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Like>> {
        let conn = self.conn.lock()?;
        let result = conn
            .query_row(
                "SELECT user_id, restaurant_id, created_at FROM likes
                 WHERE user_id = ?1 AND restaurant_id = ?2",
                params![user_id, restaurant_id],
                |row| {
                    Ok(Like {
                        user_id: row.get(0)?,
                        restaurant_id: row.get(1)?,
                        created_at: from_millis(row.get(2)?),
                    })
                },
            )
            .optional()?;
        Ok(result)
    }

    async fn liked_user_ids(&self, restaurant_id: RestaurantId) -> Result<Vec<UserId>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT user_id FROM likes WHERE restaurant_id = ?1")?;
        let ids = stmt
            .query_map(params![restaurant_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    async fn liked_restaurant_ids(&self, user_id: UserId) -> Result<Vec<RestaurantId>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT restaurant_id FROM likes WHERE user_id = ?1")?;
        let ids = stmt
            .query_map(params![user_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    async fn insert_followship(&self, followship: &Followship) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT INTO followships (follower_id, following_id, created_at) VALUES (?1, ?2, ?3)",
            params![
                followship.follower_id,
                followship.following_id,
                millis(followship.created_at)
            ],
        )?;
        Ok(())
    }

    async fn delete_followship(&self, follower_id: UserId, following_id: UserId) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "DELETE FROM followships WHERE follower_id = ?1 AND following_id = ?2",
            params![follower_id, following_id],
        )?;
        Ok(())
    }

    async fn find_followship(
        &self,
        follower_id: UserId,
        following_id: UserId,
    ) -> Result<Option<Followship>> {
        let conn = self.conn.lock()?;
        let result = conn
            .query_row(
                "SELECT follower_id, following_id, created_at FROM followships
                 WHERE follower_id = ?1 AND following_id = ?2",
                params![follower_id, following_id],
                |row| {
                    Ok(Followship {
                        follower_id: row.get(0)?,
                        following_id: row.get(1)?,
                        created_at: from_millis(row.get(2)?),
                    })
                },
            )
            .optional()?;
        Ok(result)
    }

    async fn follower_ids(&self, user_id: UserId) -> Result<Vec<UserId>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT follower_id FROM followships WHERE following_id = ?1")?;
        let ids = stmt
            .query_map(params![user_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    async fn following_ids(&self, user_id: UserId) -> Result<Vec<UserId>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT following_id FROM followships WHERE follower_id = ?1")?;
        let ids = stmt
            .query_map(params![user_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    async fn list_followships(&self) -> Result<Vec<Followship>> {
        let conn = self.conn.lock()?;
        let mut stmt =
            conn.prepare("SELECT follower_id, following_id, created_at FROM followships")?;
        let followships = stmt
            .query_map([], |row| {
                Ok(Followship {
                    follower_id: row.get(0)?,
                    following_id: row.get(1)?,
                    created_at: from_millis(row.get(2)?),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(followships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn ts(secs: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[tokio::test]
    async fn test_user_roundtrip() {
        let store = SqlitePlatformStore::in_memory().unwrap();
        let user = User::new(1, "Alice", "alice@example.com", "hash").with_image("a.png");

        store.save_user(&user).await.unwrap();
        let got = store.get_user(1).await.unwrap().unwrap();

        assert_eq!(got.name, "Alice");
        assert_eq!(got.email, "alice@example.com");
        assert_eq!(got.image.as_deref(), Some("a.png"));
        assert!(store.get_user(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restaurant_roundtrip_with_category() {
        let store = SqlitePlatformStore::in_memory().unwrap();
        store.save_category(&Category::new(3, "Ramen")).await.unwrap();
        store
            .save_restaurant(&Restaurant::new(7, "Noodle House").with_category(3))
            .await
            .unwrap();

        let got = store.get_restaurant(7).await.unwrap().unwrap();
        assert_eq!(got.category_id, Some(3));
        assert_eq!(got.view_counts, 0);

        let category = store.get_category(3).await.unwrap().unwrap();
        assert_eq!(category.name, "Ramen");
    }

    #[tokio::test]
    async fn test_increment_view_count_is_single_update() {
        let store = SqlitePlatformStore::in_memory().unwrap();
        store.save_restaurant(&Restaurant::new(1, "A")).await.unwrap();

        let first = store.increment_view_count(1).await.unwrap().unwrap();
        let second = store.increment_view_count(1).await.unwrap().unwrap();
        assert_eq!(first.view_counts, 1);
        assert_eq!(second.view_counts, 2);

        assert!(store.increment_view_count(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_favorite_rejected_by_schema() {
        let store = SqlitePlatformStore::in_memory().unwrap();
        store.insert_favorite(&Favorite::new(1, 7)).await.unwrap();

        let err = store.insert_favorite(&Favorite::new(1, 7)).await;
        assert!(err.is_err());

        // Favorite and like are independent relations; the pair may carry both.
        store.insert_like(&Like::new(1, 7)).await.unwrap();
    }

    #[tokio::test]
    async fn test_comment_ordering_newest_first() {
        let store = SqlitePlatformStore::in_memory().unwrap();
        store
            .save_comment(&Comment::new(1, "old", 1, 7).with_created_at(ts(0)))
            .await
            .unwrap();
        store
            .save_comment(&Comment::new(2, "new", 1, 7).with_created_at(ts(60)))
            .await
            .unwrap();
        store
            .save_comment(&Comment::new(3, "same instant", 1, 7).with_created_at(ts(60)))
            .await
            .unwrap();

        let ids: Vec<_> = store
            .comments_for_restaurant(7)
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let recent = store.recent_comments(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, 3);
    }

    #[tokio::test]
    async fn test_followship_directionality() {
        let store = SqlitePlatformStore::in_memory().unwrap();
        store.insert_followship(&Followship::new(1, 2)).await.unwrap();

        assert!(store.find_followship(1, 2).await.unwrap().is_some());
        assert!(store.find_followship(2, 1).await.unwrap().is_none());
        assert_eq!(store.follower_ids(2).await.unwrap(), vec![1]);
        assert_eq!(store.following_ids(1).await.unwrap(), vec![2]);

        store.delete_followship(1, 2).await.unwrap();
        assert!(store.find_followship(1, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_users_by_ids_order_and_missing() {
        let store = SqlitePlatformStore::in_memory().unwrap();
        store
            .save_user(&User::new(1, "A", "a@example.com", "h"))
            .await
            .unwrap();
        store
            .save_user(&User::new(2, "B", "b@example.com", "h"))
            .await
            .unwrap();

        let got = store.users_by_ids(&[2, 42, 1]).await.unwrap();
        let ids: Vec<_> = got.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_file_backed_store_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("platefeed.db");

        {
            let store = SqlitePlatformStore::new(&path).unwrap();
            store.save_restaurant(&Restaurant::new(1, "A")).await.unwrap();
        }

        let reopened = SqlitePlatformStore::new(&path).unwrap();
        let got = reopened.get_restaurant(1).await.unwrap().unwrap();
        assert_eq!(got.name, "A");
    }
}
