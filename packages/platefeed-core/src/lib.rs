//! platefeed-core - Social-Graph Interaction & Ranking Engine
//!
//! The domain core of a restaurant content platform: users browse
//! restaurants, comment, favorite, like, and follow each other. This
//! crate owns the parts with real invariants; routing, rendering,
//! sessions and uploads live in excluded collaborator layers.
//!
//! # Feature-First Architecture
//!
//! ```text
//! features/relations  : edge toggling (favorite/like/follow), at most
//!                       one edge per pair, explicit duplicate/missing
//!                       failures
//! features/ranking    : popularity aggregation, deterministic top-N
//! features/views      : denormalized read snapshots (detail, profile,
//!                       dashboard, feed, listing)
//!           ↓
//! platefeed-storage   : PlatformStore port + adapters
//! ```
//!
//! # Concurrency model
//!
//! Each request runs as an independent task. Services hold only an
//! `Arc<dyn PlatformStore>` plus immutable config; the store is the sole
//! shared mutable resource. The relation engine's check-then-write pair is
//! not transactional (a documented, retry-recoverable race); the view
//! counter bump is atomic inside the store.
//!
//! # Usage
//!
//! ```rust,ignore
//! use platefeed_core::{RelationService, RankingService, ViewService};
//! use platefeed_storage::InMemoryPlatformStore;
//!
//! let store = InMemoryPlatformStore::new();
//! let relations = RelationService::new(store.clone());
//!
//! relations.add_favorite(Some(user_id), restaurant_id).await?;
//! let top = RankingService::new(store.clone()).top_restaurants(Some(user_id)).await?;
//! let detail = ViewService::new(store).restaurant_detail(restaurant_id, Some(user_id)).await?;
//! ```

/// Service configuration
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

pub use config::ServiceConfig;
pub use errors::{PlatformError, Result};

pub use features::ranking::{RankedRestaurant, RankedUser, RankingService};
pub use features::relations::{RelationKind, RelationService};
pub use features::views::{
    CommentWithAuthor, DashboardRow, Feed, FeedComment, RestaurantDetail, RestaurantWithCategory,
    UserProfile, ViewService,
};
