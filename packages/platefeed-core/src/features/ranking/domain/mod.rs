//! Ranking Domain Layer
//!
//! Popularity read models: each item pairs the entity with its aggregate
//! count and the viewing user's own relation to it.

use serde::Serialize;

use platefeed_storage::{Restaurant, User};

/// Restaurant annotated with favorite popularity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRestaurant {
    pub restaurant: Restaurant,

    /// Number of users who favorited this restaurant
    pub favorited_count: usize,

    /// Whether the viewing user favorited it (false without a viewer)
    pub is_favorited: bool,
}

/// User annotated with follower popularity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedUser {
    pub user: User,

    /// Number of incoming followships
    pub follower_count: usize,

    /// Whether the viewing user follows them (false without a viewer)
    pub is_followed: bool,
}
