//! Repository port traits.

use async_trait::async_trait;

use super::error::PersistenceError;
use super::types::GameState;

/// Full-snapshot persistence. One document holds every player and the catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatePort: Send + Sync {
    /// Durably replace the stored snapshot.
    async fn save(&self, state: &GameState) -> Result<(), PersistenceError>;

    /// Read the stored snapshot. `Ok(None)` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<GameState>, PersistenceError>;
}
