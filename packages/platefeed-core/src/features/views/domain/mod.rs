//! View Domain Layer
//!
//! One typed snapshot per read operation. Each snapshot is denormalized:
//! it carries every related entity the page needs, so the presentation
//! layer renders without further queries or runtime shape guessing.

use serde::Serialize;

use platefeed_storage::{
    Category, CategoryId, Comment, Restaurant, RestaurantId, User,
};

/// Restaurant joined with its category, for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantWithCategory {
    pub restaurant: Restaurant,
    pub category: Option<Category>,
}

/// Comment joined with its author
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}

/// Full detail-page snapshot for one restaurant
///
/// `restaurant.view_counts` reflects the increment performed by the
/// assembling read itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    pub category: Option<Category>,

    /// Comments on this restaurant, newest first, each with its author
    pub comments: Vec<CommentWithAuthor>,

    /// Whether the viewing user favorited this restaurant
    pub is_favorited: bool,

    /// Whether the viewing user liked this restaurant
    pub is_liked: bool,
}

/// Profile snapshot for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub user: User,

    pub favorited_restaurants: Vec<Restaurant>,
    pub liked_restaurants: Vec<Restaurant>,
    pub followers: Vec<User>,
    pub followings: Vec<User>,

    /// Restaurants the user commented on, deduplicated by restaurant in
    /// order of first occurrence among the newest-first comments
    pub commented_restaurants: Vec<Restaurant>,

    /// Count of distinct restaurants commented on, NOT total comments
    pub comment_count: usize,
}

/// Flat management-page record for one restaurant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRow {
    pub id: RestaurantId,
    pub name: String,
    pub tel: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub view_counts: u64,
    pub category_id: Option<CategoryId>,
    pub category_name: Option<String>,
}

/// Comment row in the activity feed, flattened with one-level relations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedComment {
    pub comment: Comment,
    pub author: User,
    pub restaurant: Restaurant,
}

/// Activity feed: newest restaurants and newest comments, independently
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feed {
    pub restaurants: Vec<RestaurantWithCategory>,
    pub comments: Vec<FeedComment>,
}
