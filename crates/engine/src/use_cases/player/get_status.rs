//! Status snapshot use case.

use std::sync::Arc;

use vidaloka_domain::{
    AttributeSet, Character, EventId, PlayerId, PlayerStatus, SubZoneId, ZoneId,
};

use crate::error::GameError;
use crate::stores::GameStore;

/// Resolved location, with display names when the catalog knows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationView {
    pub zone_id: ZoneId,
    pub zone_name: Option<String>,
    pub sub_zone_id: SubZoneId,
    pub sub_zone_name: Option<String>,
}

/// Everything a status reply shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub player_id: PlayerId,
    pub name: String,
    pub character: Option<Character>,
    pub experience: i64,
    pub currency: i64,
    pub influence: i64,
    pub stress: i64,
    pub status: PlayerStatus,
    pub location: Option<LocationView>,
    pub pending_event: Option<EventId>,
    pub decisions: usize,
}

impl StatusSnapshot {
    pub fn attributes(&self) -> Option<&AttributeSet> {
        self.character.as_ref().map(|c| &c.attributes)
    }
}

pub struct GetStatus {
    store: Arc<GameStore>,
}

impl GetStatus {
    pub fn new(store: Arc<GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, player_id: &PlayerId) -> Result<StatusSnapshot, GameError> {
        self.store
            .read(|state| {
                let player = state
                    .players
                    .get(player_id)
                    .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
                let catalog = &state.catalog;

                let character = player
                    .character_id()
                    .and_then(|id| catalog.character(id))
                    .cloned();
                let location = player.location().map(|loc| {
                    let zone = catalog.zone(&loc.zone_id);
                    LocationView {
                        zone_id: loc.zone_id.clone(),
                        zone_name: zone.map(|z| z.name.clone()),
                        sub_zone_id: loc.sub_zone_id.clone(),
                        sub_zone_name: zone
                            .and_then(|z| z.sub_zone(&loc.sub_zone_id))
                            .map(|sz| sz.name.clone()),
                    }
                });

                Ok(StatusSnapshot {
                    player_id: player.id().clone(),
                    name: player.name().to_string(),
                    character,
                    experience: player.experience(),
                    currency: player.currency(),
                    influence: player.influence(),
                    stress: player.stress().value(),
                    status: player.status(),
                    location,
                    pending_event: player.pending_event().cloned(),
                    decisions: player.decisions().len(),
                })
            })
            .await
    }
}
