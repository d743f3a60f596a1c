//! Error types for platefeed-core
//!
//! One typed error per failed operation; the excluded presentation layer
//! maps each kind to a user-facing message and redirect. The core never
//! formats presentation strings and never retries internally.

use platefeed_storage::StorageError;
use thiserror::Error;

/// Main error type for platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Entity or edge absent (the message says which)
    #[error("not found: {0}")]
    NotFound(String),

    /// Edge already exists for the pair
    #[error("duplicate relation: {0}")]
    DuplicateRelation(String),

    /// Operation requires an acting identity and none was supplied
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Malformed input
    #[error("validation: {0}")]
    Validation(String),

    /// Storage backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PlatformError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        PlatformError::NotFound(msg.into())
    }

    /// Create a duplicate-relation error
    pub fn duplicate_relation(msg: impl Into<String>) -> Self {
        PlatformError::DuplicateRelation(msg.into())
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        PlatformError::Unauthenticated(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        PlatformError::Validation(msg.into())
    }

    /// Stable kind string for the collaborator layer's message mapping
    pub fn kind(&self) -> &'static str {
        match self {
            PlatformError::NotFound(_) => "not_found",
            PlatformError::DuplicateRelation(_) => "duplicate_relation",
            PlatformError::Unauthenticated(_) => "unauthenticated",
            PlatformError::Validation(_) => "validation",
            PlatformError::Storage(_) => "storage",
        }
    }
}

/// Result type alias for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
