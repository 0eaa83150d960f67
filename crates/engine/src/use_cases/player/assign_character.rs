//! Assign character use case.

use std::sync::Arc;

use vidaloka_domain::{CharacterId, Location, Player, PlayerId};

use crate::error::GameError;
use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::settings::GameRules;
use crate::stores::GameStore;

/// Binds a player to a character, once, and places them at its start.
pub struct AssignCharacter {
    store: Arc<GameStore>,
    clock: Arc<dyn ClockPort>,
    rules: GameRules,
}

impl AssignCharacter {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>, rules: GameRules) -> Self {
        Self {
            store,
            clock,
            rules,
        }
    }

    /// The start is the character's own starting location, or the configured
    /// default; it must exist in the catalog.
    pub async fn execute(
        &self,
        player_id: &PlayerId,
        character_id: &CharacterId,
    ) -> Result<Player, GameError> {
        let now = self.clock.now();
        let player = self
            .store
            .update_player(player_id, |player, catalog| {
                let character = catalog
                    .character(character_id)
                    .ok_or_else(|| GameError::CharacterNotFound(character_id.clone()))?;

                if let Some(existing) = player.character_id() {
                    return Err(GameError::CharacterAlreadyAssigned {
                        player_id: player_id.clone(),
                        character_id: existing.clone(),
                    });
                }

                let start = character
                    .starting_location()
                    .map(|(zone, sub_zone)| Location::new(zone.clone(), sub_zone.clone()))
                    .unwrap_or_else(|| self.rules.default_location.clone());
                let zone = catalog
                    .zone(&start.zone_id)
                    .ok_or_else(|| GameError::ZoneNotFound(start.zone_id.clone()))?;
                if zone.sub_zone(&start.sub_zone_id).is_none() {
                    return Err(GameError::SubZoneNotFound {
                        zone_id: start.zone_id.clone(),
                        sub_zone_id: start.sub_zone_id.clone(),
                    });
                }

                player
                    .assign_character(character_id.clone(), start, now)
                    .map_err(|_| GameError::CharacterAlreadyAssigned {
                        player_id: player_id.clone(),
                        character_id: character_id.clone(),
                    })?;
                Ok(player.clone())
            })
            .await?;

        tracing::info!(
            player_id = %player_id,
            character_id = %character_id,
            location = ?player.location(),
            "Character assigned"
        );
        Ok(player)
    }
}
