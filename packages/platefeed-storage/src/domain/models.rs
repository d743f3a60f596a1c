//! Storage Domain Models
//!
//! Entities and edge records of the restaurant platform:
//! - Content entities: `User`, `Restaurant`, `Category`, `Comment`
//! - Relation edges: `Favorite`, `Like`, `Followship`
//!
//! Edges carry no identity beyond their endpoint pair; uniqueness per pair
//! is the core invariant the relation engine asserts on top of this layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User ID (primary key)
pub type UserId = i64;

/// Restaurant ID (primary key)
pub type RestaurantId = i64;

/// Category ID (primary key)
pub type CategoryId = i64;

/// Comment ID (primary key)
pub type CommentId = i64;

/// Platform member
///
/// The password hash is an opaque string produced by the excluded
/// authentication layer; this crate never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID (primary key)
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Sign-in email (unique)
    pub email: String,

    /// Opaque credential hash
    pub password_hash: String,

    /// Avatar image reference
    pub image: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Restaurant listing
///
/// `view_counts` is a monotonic counter; it is only ever bumped through
/// [`PlatformStore::increment_view_count`](super::ports::PlatformStore),
/// never written back from an application-layer read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Restaurant ID (primary key)
    pub id: RestaurantId,

    /// Restaurant name
    pub name: String,

    /// Phone number
    pub tel: Option<String>,

    /// Street address
    pub address: Option<String>,

    /// Opening hours, free-form
    pub opening_hours: Option<String>,

    /// Long description
    pub description: Option<String>,

    /// Cover image reference
    pub image: Option<String>,

    /// Detail-view counter (monotonic)
    pub view_counts: u64,

    /// Category reference (uncategorized when None)
    pub category_id: Option<CategoryId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    pub fn new(id: RestaurantId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            tel: None,
            address: None,
            opening_hours: None,
            description: None,
            image: None,
            view_counts: 0,
            category_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Restaurant category
///
/// Many restaurants reference one category; there is no ownership cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID (primary key)
    pub id: CategoryId,

    /// Category name
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Comment on a restaurant
///
/// References exactly one author and one subject restaurant, both assumed
/// to exist at creation time. Integrity is not enforced retroactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID (primary key)
    pub id: CommentId,

    /// Comment body
    pub text: String,

    /// Author (foreign key)
    pub user_id: UserId,

    /// Subject restaurant (foreign key)
    pub restaurant_id: RestaurantId,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: CommentId,
        text: impl Into<String>,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            user_id,
            restaurant_id,
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Favorite edge: user bookmarked a restaurant
///
/// At most one per (user, restaurant) pair. Independent of [`Like`]; the
/// same pair may carry both edges at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: UserId, restaurant_id: RestaurantId) -> Self {
        Self {
            user_id,
            restaurant_id,
            created_at: Utc::now(),
        }
    }
}

/// Like edge: user liked a restaurant
///
/// Same uniqueness rule as [`Favorite`], tracked as a separate relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(user_id: UserId, restaurant_id: RestaurantId) -> Self {
        Self {
            user_id,
            restaurant_id,
            created_at: Utc::now(),
        }
    }
}

/// Followship edge: follower follows following
///
/// Directed; (a, b) and (b, a) are distinct edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Followship {
    pub follower_id: UserId,
    pub following_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Followship {
    pub fn new(follower_id: UserId, following_id: UserId) -> Self {
        Self {
            follower_id,
            following_id,
            created_at: Utc::now(),
        }
    }
}
