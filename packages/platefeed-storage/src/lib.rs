//! platefeed-storage - Repository Access Layer
//!
//! Abstract read/write operations over the platform's entities (users,
//! restaurants, categories, comments) and relation edges (favorites,
//! likes, followships), behind the [`PlatformStore`] port.
//!
//! ## Backends
//!
//! - [`InMemoryPlatformStore`]: BTreeMap-backed, for tests and local runs
//! - [`SqlitePlatformStore`]: file or in-memory SQLite, for persistence
//!
//! ## Ordering contracts
//!
//! Adapters agree on iteration order so the engines above stay
//! deterministic: `list_*` is id-ascending, "newest first" is
//! (created_at desc, id desc), and `*_by_ids` preserves request order.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use platefeed_storage::{InMemoryPlatformStore, PlatformStore, Restaurant};
//!
//! let store = InMemoryPlatformStore::new();
//! store.save_restaurant(&Restaurant::new(1, "Noodle House")).await?;
//! let found = store.get_restaurant(1).await?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{
    Category, CategoryId, Comment, CommentId, Favorite, Followship, Like, PlatformStore,
    Restaurant, RestaurantId, User, UserId,
};

pub use infrastructure::{InMemoryPlatformStore, SqlitePlatformStore};
