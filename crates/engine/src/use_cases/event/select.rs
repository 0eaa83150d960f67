//! Select event use case.

use std::sync::Arc;

use vidaloka_domain::{Event, PlayerId, PlayerStatus};

use crate::error::GameError;
use crate::infrastructure::dice::Dice;
use crate::infrastructure::ports::ClockPort;
use crate::stores::GameStore;

/// Picks an eligible event for a player and makes it their pending event.
pub struct SelectEvent {
    store: Arc<GameStore>,
    clock: Arc<dyn ClockPort>,
    dice: Dice,
}

impl SelectEvent {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>, dice: Dice) -> Self {
        Self { store, clock, dice }
    }

    /// Uniform pick among events whose minimums the player meets and whose
    /// zone list (if any) contains the player's zone. Any prior pending event
    /// is replaced.
    pub async fn execute(&self, player_id: &PlayerId) -> Result<Event, GameError> {
        self.select(player_id, None).await
    }

    /// Like `execute`, but fails with `InvalidStatus` unless the player is
    /// still `active` once the write lock is held.
    pub async fn execute_if_active(&self, player_id: &PlayerId) -> Result<Event, GameError> {
        self.select(player_id, Some(PlayerStatus::Active)).await
    }

    async fn select(
        &self,
        player_id: &PlayerId,
        required: Option<PlayerStatus>,
    ) -> Result<Event, GameError> {
        let now = self.clock.now();
        let (event, replaced) = self
            .store
            .update_player(player_id, |player, catalog| {
                if required.is_some_and(|status| player.status() != status) {
                    return Err(GameError::InvalidStatus(player.status().to_string()));
                }
                if player.character_id().is_none() {
                    return Err(GameError::NoCharacter(player_id.clone()));
                }

                let eligible = catalog.eligible_events(
                    player.experience(),
                    player.currency(),
                    player.influence(),
                    player.location().map(|l| &l.zone_id),
                );
                let event = self
                    .dice
                    .pick_index(eligible.len())
                    .and_then(|i| eligible.get(i).copied())
                    .cloned()
                    .ok_or_else(|| GameError::NoEligibleEvents(player_id.clone()))?;

                let replaced = player.begin_event(event.id.clone(), now);
                Ok((event, replaced))
            })
            .await?;

        tracing::info!(
            player_id = %player_id,
            event_id = %event.id,
            replaced = ?replaced,
            "Event selected"
        );
        Ok(event)
    }
}
