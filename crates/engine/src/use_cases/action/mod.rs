//! Action use cases.

mod list_available;
mod perform;

pub use list_available::ListAvailableActions;
pub use perform::{ActionResolution, PerformAction};
pub(crate) use perform::log_action;

use std::sync::Arc;

use vidaloka_domain::{Catalog, Player, SubZone};

use crate::error::GameError;
use crate::infrastructure::dice::Dice;
use crate::infrastructure::ports::ClockPort;
use crate::stores::GameStore;

/// Container for action use cases.
pub struct ActionUseCases {
    pub list_available: Arc<ListAvailableActions>,
    pub perform: Arc<PerformAction>,
}

impl ActionUseCases {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>, dice: Dice) -> Self {
        Self {
            list_available: Arc::new(ListAvailableActions::new(store.clone())),
            perform: Arc::new(PerformAction::new(store, clock, dice)),
        }
    }
}

/// The sub-zone the player currently stands in.
///
/// A player without a location has not picked a character yet.
pub(crate) fn current_sub_zone<'a>(
    player: &Player,
    catalog: &'a Catalog,
) -> Result<&'a SubZone, GameError> {
    let location = player
        .location()
        .ok_or_else(|| GameError::NoCharacter(player.id().clone()))?;
    let zone = catalog
        .zone(&location.zone_id)
        .ok_or_else(|| GameError::ZoneNotFound(location.zone_id.clone()))?;
    zone.sub_zone(&location.sub_zone_id)
        .ok_or_else(|| GameError::SubZoneNotFound {
            zone_id: location.zone_id.clone(),
            sub_zone_id: location.sub_zone_id.clone(),
        })
}
