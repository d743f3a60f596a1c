//! Aggregation & Ranking Engine
//!
//! Two-phase pipeline: fetch the full entity collection plus the full edge
//! set, count edges in memory, then stable-sort descending and truncate.
//! The store iterates id-ascending and the sort is stable, so equal counts
//! keep id order and repeated calls over unchanged data return identical
//! rankings.
//!
//! The viewer is optional on both rankings. Without one, the per-item
//! relation flags are false and the counts are unaffected.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use platefeed_storage::{PlatformStore, RestaurantId, UserId};

use crate::config::ServiceConfig;
use crate::errors::Result;
use crate::features::ranking::domain::{RankedRestaurant, RankedUser};

pub struct RankingService {
    store: Arc<dyn PlatformStore>,
    config: ServiceConfig,
}

impl RankingService {
    pub fn new<S: PlatformStore + 'static>(store: S) -> Self {
        Self::with_store(Arc::new(store))
    }

    pub fn with_store(store: Arc<dyn PlatformStore>) -> Self {
        Self {
            store,
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Restaurants ordered by favorite count, most favorited first.
    ///
    /// Returns at most `config.top_limit` entries; an empty platform
    /// yields an empty list.
    pub async fn top_restaurants(&self, viewer: Option<UserId>) -> Result<Vec<RankedRestaurant>> {
        let restaurants = self.store.list_restaurants().await?;
        let favorites = self.store.list_favorites().await?;

        let mut counts: HashMap<RestaurantId, usize> = HashMap::new();
        for edge in &favorites {
            *counts.entry(edge.restaurant_id).or_insert(0) += 1;
        }

        // The viewer's own set is built once for O(1) membership checks.
        let viewer_set: HashSet<RestaurantId> = match viewer {
            Some(viewer_id) => self
                .store
                .favorited_restaurant_ids(viewer_id)
                .await?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        let mut ranked: Vec<RankedRestaurant> = restaurants
            .into_iter()
            .map(|restaurant| RankedRestaurant {
                favorited_count: counts.get(&restaurant.id).copied().unwrap_or(0),
                is_favorited: viewer_set.contains(&restaurant.id),
                restaurant,
            })
            .collect();

        ranked.sort_by(|a, b| b.favorited_count.cmp(&a.favorited_count));
        ranked.truncate(self.config.top_limit);

        debug!(entries = ranked.len(), "top restaurants assembled");
        Ok(ranked)
    }

    /// Users ordered by follower count, most followed first.
    pub async fn top_users(&self, viewer: Option<UserId>) -> Result<Vec<RankedUser>> {
        let users = self.store.list_users().await?;
        let followships = self.store.list_followships().await?;

        let mut counts: HashMap<UserId, usize> = HashMap::new();
        for edge in &followships {
            *counts.entry(edge.following_id).or_insert(0) += 1;
        }

        let viewer_set: HashSet<UserId> = match viewer {
            Some(viewer_id) => self
                .store
                .following_ids(viewer_id)
                .await?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        let mut ranked: Vec<RankedUser> = users
            .into_iter()
            .map(|user| RankedUser {
                follower_count: counts.get(&user.id).copied().unwrap_or(0),
                is_followed: viewer_set.contains(&user.id),
                user,
            })
            .collect();

        ranked.sort_by(|a, b| b.follower_count.cmp(&a.follower_count));
        ranked.truncate(self.config.top_limit);

        debug!(entries = ranked.len(), "top users assembled");
        Ok(ranked)
    }
}
