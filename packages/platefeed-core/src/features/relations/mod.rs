//! Relation Toggle Engine
//!
//! ```text
//! application/ (RelationService: add/remove per kind + dispatch)
//!           ↓
//! domain/ (RelationKind)
//!           ↓
//! platefeed-storage (PlatformStore port)
//! ```

pub mod application;
pub mod domain;

pub use application::RelationService;
pub use domain::RelationKind;
