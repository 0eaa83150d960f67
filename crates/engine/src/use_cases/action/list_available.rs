//! List available actions use case.

use std::sync::Arc;

use vidaloka_domain::{Action, PlayerId};

use super::current_sub_zone;
use crate::error::GameError;
use crate::stores::GameStore;

pub struct ListAvailableActions {
    store: Arc<GameStore>,
}

impl ListAvailableActions {
    pub fn new(store: Arc<GameStore>) -> Self {
        Self { store }
    }

    /// Actions offered where the player stands, in the sub-zone's order.
    pub async fn execute(&self, player_id: &PlayerId) -> Result<Vec<Action>, GameError> {
        self.store
            .read(|state| {
                let player = state
                    .players
                    .get(player_id)
                    .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
                if player.character_id().is_none() {
                    return Err(GameError::NoCharacter(player_id.clone()));
                }
                let sub_zone = current_sub_zone(player, &state.catalog)?;
                Ok(state.catalog.actions_at(sub_zone).cloned().collect())
            })
            .await
    }
}
