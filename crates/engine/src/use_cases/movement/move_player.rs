//! Move player use case.

use std::sync::Arc;

use vidaloka_domain::{Location, PlayerId, SubZoneId, ZoneId};

use crate::error::GameError;
use crate::infrastructure::ports::ClockPort;
use crate::stores::GameStore;

pub struct MovePlayer {
    store: Arc<GameStore>,
    clock: Arc<dyn ClockPort>,
}

impl MovePlayer {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Move the player to `sub_zone_id` inside `zone_id`.
    ///
    /// Both ids must resolve in the catalog. Moving is free: no decision is
    /// recorded and no counters change.
    pub async fn execute(
        &self,
        player_id: &PlayerId,
        zone_id: &ZoneId,
        sub_zone_id: &SubZoneId,
    ) -> Result<Location, GameError> {
        let now = self.clock.now();

        let (from, to) = self
            .store
            .update_player(player_id, |player, catalog| {
                if player.character_id().is_none() {
                    return Err(GameError::NoCharacter(player_id.clone()));
                }
                let zone = catalog
                    .zone(zone_id)
                    .ok_or_else(|| GameError::ZoneNotFound(zone_id.clone()))?;
                if zone.sub_zone(sub_zone_id).is_none() {
                    return Err(GameError::SubZoneNotFound {
                        zone_id: zone_id.clone(),
                        sub_zone_id: sub_zone_id.clone(),
                    });
                }

                let from = player.location().cloned();
                let to = Location::new(zone_id.clone(), sub_zone_id.clone());
                player.move_to(to.clone(), now);
                Ok((from, to))
            })
            .await?;

        tracing::info!(
            player_id = %player_id,
            from = ?from,
            zone_id = %to.zone_id,
            sub_zone_id = %to.sub_zone_id,
            "Player moved"
        );
        Ok(to)
    }
}
