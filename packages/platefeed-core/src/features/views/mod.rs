//! View Assembly Engine
//!
//! ```text
//! application/ (ViewService: detail, profile, dashboard, feed, listing)
//!           ↓
//! domain/ (typed snapshots, one per read operation)
//!           ↓
//! platefeed-storage (PlatformStore port)
//! ```

pub mod application;
pub mod domain;

pub use application::ViewService;
pub use domain::{
    CommentWithAuthor, DashboardRow, Feed, FeedComment, RestaurantDetail, RestaurantWithCategory,
    UserProfile,
};
