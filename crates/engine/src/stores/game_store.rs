//! The authoritative player store.
//!
//! One reader/writer lock guards every player and the catalog. Mutations hold
//! the write lock across the persistence flush, so a successful return means
//! the change is durable. A failed flush rolls the in-memory change back.

use std::sync::Arc;

use tokio::sync::RwLock;
use vidaloka_domain::{Catalog, Player, PlayerId, PlayerStatus};

use crate::error::GameError;
use crate::infrastructure::ports::{GameState, StatePort};

pub struct GameStore {
    state: RwLock<GameState>,
    persistence: Arc<dyn StatePort>,
}

impl GameStore {
    pub fn new(state: GameState, persistence: Arc<dyn StatePort>) -> Self {
        Self {
            state: RwLock::new(state),
            persistence,
        }
    }

    /// Build the store from the last saved snapshot.
    ///
    /// A freshly loaded `catalog` replaces the stored one; without it the
    /// stored catalog is kept.
    pub async fn restore(
        persistence: Arc<dyn StatePort>,
        catalog: Option<Catalog>,
    ) -> Result<Self, GameError> {
        let stored = persistence.load().await?;
        let state = match (stored, catalog) {
            (Some(mut state), Some(catalog)) => {
                state.catalog = catalog;
                state
            }
            (Some(state), None) => state,
            (None, Some(catalog)) => GameState::new(catalog),
            (None, None) => {
                tracing::warn!("No content catalog and no saved state, starting with an empty catalog");
                GameState::default()
            }
        };
        tracing::info!(players = state.players.len(), "Game store ready");
        Ok(Self::new(state, persistence))
    }

    /// Run `f` under the shared lock.
    pub async fn read<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        let guard = self.state.read().await;
        f(&guard)
    }

    pub async fn get_player(&self, id: &PlayerId) -> Result<Player, GameError> {
        self.read(|state| {
            state
                .players
                .get(id)
                .cloned()
                .ok_or_else(|| GameError::PlayerNotFound(id.clone()))
        })
        .await
    }

    /// Snapshot of every player with `status`, ordered by id.
    pub async fn players_with_status(&self, status: PlayerStatus) -> Vec<Player> {
        self.read(|state| {
            state
                .players
                .values()
                .filter(|p| p.status() == status)
                .cloned()
                .collect()
        })
        .await
    }

    /// Insert a new player and flush. Duplicate ids are rejected.
    pub async fn insert_player(&self, player: Player) -> Result<Player, GameError> {
        let mut guard = self.state.write().await;
        let id = player.id().clone();
        if guard.players.contains_key(&id) {
            return Err(GameError::AlreadyRegistered(id));
        }
        guard.players.insert(id.clone(), player.clone());

        if let Err(e) = self.persistence.save(&guard).await {
            guard.players.remove(&id);
            tracing::error!(player_id = %id, error = %e, "Registration not persisted, rolled back");
            return Err(e.into());
        }
        Ok(player)
    }

    /// Mutate one player under the write lock, then flush.
    ///
    /// If `f` fails, or the flush fails, the player is restored to its state
    /// before the call and the error is returned.
    pub async fn update_player<R>(
        &self,
        id: &PlayerId,
        f: impl FnOnce(&mut Player, &Catalog) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        let mut guard = self.state.write().await;

        let (backup, result) = {
            let GameState { players, catalog } = &mut *guard;
            let player = players
                .get_mut(id)
                .ok_or_else(|| GameError::PlayerNotFound(id.clone()))?;
            let backup = player.clone();
            match f(player, catalog) {
                Ok(result) => (backup, result),
                Err(e) => {
                    *player = backup;
                    return Err(e);
                }
            }
        };

        if let Err(e) = self.persistence.save(&guard).await {
            guard.players.insert(id.clone(), backup);
            tracing::error!(player_id = %id, error = %e, "Mutation not persisted, rolled back");
            return Err(e.into());
        }
        Ok(result)
    }

    /// Flush the current state without mutating it.
    pub async fn flush(&self) -> Result<(), GameError> {
        let guard = self.state.read().await;
        self.persistence.save(&guard).await?;
        Ok(())
    }
}
