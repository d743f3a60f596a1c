//! Storage Infrastructure Layer
//!
//! Multiple storage backends for the PlatformStore trait

pub mod memory_store;
pub use memory_store::InMemoryPlatformStore;

#[cfg(feature = "sqlite")]
pub mod sqlite_store;
#[cfg(feature = "sqlite")]
pub use sqlite_store::SqlitePlatformStore;

// If sqlite feature disabled, use InMemory as fallback
#[cfg(not(feature = "sqlite"))]
pub type SqlitePlatformStore = InMemoryPlatformStore;
