//! Relation Toggle Engine
//!
//! Enforces the at-most-one-edge invariant for favorite, like and follow
//! relations. Each operation asserts the opposite precondition of its
//! counterpart: add fails `DuplicateRelation` when the edge exists, remove
//! fails `NotFound` when it does not. The two are deliberately NOT an
//! idempotent set/unset pair; callers rely on the explicit failure.
//!
//! The existence check and the write are two storage calls with no
//! transaction around them. Two concurrent identical requests from the
//! same user may therefore race, surfacing a spurious `DuplicateRelation`
//! or `NotFound` (or a constraint error from a backend that enforces the
//! pair key, like the SQLite adapter). Accepted gap; a retry restores the
//! intended state.

use std::sync::Arc;

use tracing::debug;

use platefeed_storage::{Favorite, Followship, Like, PlatformStore, RestaurantId, UserId};

use crate::errors::{PlatformError, Result};
use crate::features::relations::domain::RelationKind;

/// Toggle engine over the three relation kinds.
///
/// The acting user arrives as `Option<UserId>`: the session layer passes
/// along whatever identity it holds, and `None` fails `Unauthenticated`
/// before any storage access.
pub struct RelationService {
    store: Arc<dyn PlatformStore>,
}

impl RelationService {
    pub fn new<S: PlatformStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn with_store(store: Arc<dyn PlatformStore>) -> Self {
        Self { store }
    }

    fn require_actor(actor: Option<UserId>) -> Result<UserId> {
        actor.ok_or_else(|| PlatformError::unauthenticated("relation change without an actor"))
    }

    async fn require_restaurant(&self, restaurant_id: RestaurantId) -> Result<()> {
        self.store
            .get_restaurant(restaurant_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| PlatformError::not_found(format!("restaurant {}", restaurant_id)))
    }

    /// Create a favorite edge from the actor to the restaurant.
    pub async fn add_favorite(
        &self,
        actor: Option<UserId>,
        restaurant_id: RestaurantId,
    ) -> Result<()> {
        let actor = Self::require_actor(actor)?;
        self.require_restaurant(restaurant_id).await?;

        if self.store.find_favorite(actor, restaurant_id).await?.is_some() {
            return Err(PlatformError::duplicate_relation(format!(
                "favorite {} -> {}",
                actor, restaurant_id
            )));
        }

        self.store
            .insert_favorite(&Favorite::new(actor, restaurant_id))
            .await?;
        debug!(user_id = actor, restaurant_id, "favorite added");
        Ok(())
    }

    /// Remove the actor's favorite edge to the restaurant.
    pub async fn remove_favorite(
        &self,
        actor: Option<UserId>,
        restaurant_id: RestaurantId,
    ) -> Result<()> {
        let actor = Self::require_actor(actor)?;

        if self.store.find_favorite(actor, restaurant_id).await?.is_none() {
            return Err(PlatformError::not_found(format!(
                "favorite edge {} -> {}",
                actor, restaurant_id
            )));
        }

        self.store.delete_favorite(actor, restaurant_id).await?;
        debug!(user_id = actor, restaurant_id, "favorite removed");
        Ok(())
    }

    /// Create a like edge from the actor to the restaurant.
    pub async fn add_like(
        &self,
        actor: Option<UserId>,
        restaurant_id: RestaurantId,
    ) -> Result<()> {
        let actor = Self::require_actor(actor)?;
        self.require_restaurant(restaurant_id).await?;

        if self.store.find_like(actor, restaurant_id).await?.is_some() {
            return Err(PlatformError::duplicate_relation(format!(
                "like {} -> {}",
                actor, restaurant_id
            )));
        }

        self.store
            .insert_like(&Like::new(actor, restaurant_id))
            .await?;
        debug!(user_id = actor, restaurant_id, "like added");
        Ok(())
    }

    /// Remove the actor's like edge to the restaurant.
    pub async fn remove_like(
        &self,
        actor: Option<UserId>,
        restaurant_id: RestaurantId,
    ) -> Result<()> {
        let actor = Self::require_actor(actor)?;

        if self.store.find_like(actor, restaurant_id).await?.is_none() {
            return Err(PlatformError::not_found(format!(
                "like edge {} -> {}",
                actor, restaurant_id
            )));
        }

        self.store.delete_like(actor, restaurant_id).await?;
        debug!(user_id = actor, restaurant_id, "like removed");
        Ok(())
    }

    /// Create a followship edge from the actor to another user.
    ///
    /// Following yourself is rejected with `Validation`.
    pub async fn add_following(&self, actor: Option<UserId>, user_id: UserId) -> Result<()> {
        let actor = Self::require_actor(actor)?;

        if actor == user_id {
            return Err(PlatformError::validation(format!(
                "user {} cannot follow themselves",
                actor
            )));
        }

        self.store
            .get_user(user_id)
            .await?
            .ok_or_else(|| PlatformError::not_found(format!("user {}", user_id)))?;

        if self.store.find_followship(actor, user_id).await?.is_some() {
            return Err(PlatformError::duplicate_relation(format!(
                "followship {} -> {}",
                actor, user_id
            )));
        }

        self.store
            .insert_followship(&Followship::new(actor, user_id))
            .await?;
        debug!(follower_id = actor, following_id = user_id, "followship added");
        Ok(())
    }

    /// Remove the actor's followship edge to another user.
    pub async fn remove_following(&self, actor: Option<UserId>, user_id: UserId) -> Result<()> {
        let actor = Self::require_actor(actor)?;

        if self.store.find_followship(actor, user_id).await?.is_none() {
            return Err(PlatformError::not_found(format!(
                "followship edge {} -> {}",
                actor, user_id
            )));
        }

        self.store.delete_followship(actor, user_id).await?;
        debug!(
            follower_id = actor,
            following_id = user_id,
            "followship removed"
        );
        Ok(())
    }

    /// Dispatch entry point: create an edge of the given kind.
    pub async fn add_edge(
        &self,
        kind: RelationKind,
        actor: Option<UserId>,
        target: i64,
    ) -> Result<()> {
        match kind {
            RelationKind::Favorite => self.add_favorite(actor, target).await,
            RelationKind::Like => self.add_like(actor, target).await,
            RelationKind::Follow => self.add_following(actor, target).await,
        }
    }

    /// Dispatch entry point: remove an edge of the given kind.
    pub async fn remove_edge(
        &self,
        kind: RelationKind,
        actor: Option<UserId>,
        target: i64,
    ) -> Result<()> {
        match kind {
            RelationKind::Favorite => self.remove_favorite(actor, target).await,
            RelationKind::Like => self.remove_like(actor, target).await,
            RelationKind::Follow => self.remove_following(actor, target).await,
        }
    }
}
