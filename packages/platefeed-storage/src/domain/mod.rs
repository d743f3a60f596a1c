//! Storage Domain Layer
//!
//! Port/Adapter pattern for storage backend abstraction

pub mod models;
pub mod ports;

pub use models::{
    Category, CategoryId, Comment, CommentId, Favorite, Followship, Like, Restaurant,
    RestaurantId, User, UserId,
};
pub use ports::PlatformStore;
