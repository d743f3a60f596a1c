//! Aggregation & Ranking Engine
//!
//! ```text
//! application/ (RankingService: top_restaurants, top_users)
//!           ↓
//! domain/ (RankedRestaurant, RankedUser)
//!           ↓
//! platefeed-storage (PlatformStore port)
//! ```

pub mod application;
pub mod domain;

pub use application::RankingService;
pub use domain::{RankedRestaurant, RankedUser};
