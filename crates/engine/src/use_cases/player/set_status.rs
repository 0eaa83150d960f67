//! Set status use case.

use std::sync::Arc;

use vidaloka_domain::{PlayerId, PlayerStatus, StatusChange};

use crate::error::GameError;
use crate::infrastructure::ports::ClockPort;
use crate::stores::GameStore;

/// Switches a player between `active`, `sleeping` and `autopilot`.
pub struct SetStatus {
    store: Arc<GameStore>,
    clock: Arc<dyn ClockPort>,
}

impl SetStatus {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// `status` is the command text (`"autopilot"`, `"Sleeping"`, ...).
    pub async fn execute(
        &self,
        player_id: &PlayerId,
        status: &str,
    ) -> Result<StatusChange, GameError> {
        let status: PlayerStatus = status
            .parse()
            .map_err(|_| GameError::InvalidStatus(status.to_string()))?;
        self.execute_typed(player_id, status).await
    }

    pub async fn execute_typed(
        &self,
        player_id: &PlayerId,
        status: PlayerStatus,
    ) -> Result<StatusChange, GameError> {
        let now = self.clock.now();
        let change = self
            .store
            .update_player(player_id, |player, _| Ok(player.set_status(status, now)))
            .await?;

        if let StatusChange::Changed { from, to } = change {
            tracing::info!(player_id = %player_id, from = %from, to = %to, "Player status changed");
        }
        Ok(change)
    }
}
