//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area. Every use case
//! goes through the `GameStore`, so the lock and persistence discipline is
//! the same for all of them.

pub mod action;
pub mod autopilot;
pub mod event;
pub mod movement;
pub mod player;

pub use action::{ActionResolution, ActionUseCases};
pub use autopilot::{AutopilotStep, AutopilotUseCases, DecisionEngine};
pub use event::{format_event_notification, EventResolution, EventUseCases};
pub use movement::MovementUseCases;
pub use player::{PlayerUseCases, StatusSnapshot};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use vidaloka_domain::{Catalog, Location, Outcome, Player};

use crate::infrastructure::dice::Dice;
use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::settings::GameRules;
use crate::stores::GameStore;

/// Container for all use cases.
pub struct UseCases {
    pub player: PlayerUseCases,
    pub action: ActionUseCases,
    pub event: EventUseCases,
    pub movement: MovementUseCases,
    pub autopilot: AutopilotUseCases,
}

impl UseCases {
    pub fn new(
        store: Arc<GameStore>,
        clock: Arc<dyn ClockPort>,
        dice: Dice,
        rules: GameRules,
    ) -> Self {
        let player = PlayerUseCases::new(store.clone(), clock.clone(), rules);
        let action = ActionUseCases::new(store.clone(), clock.clone(), dice.clone());
        let event = EventUseCases::new(store.clone(), clock.clone(), dice.clone());
        let movement = MovementUseCases::new(store.clone(), clock);
        let autopilot = AutopilotUseCases::new(
            store,
            DecisionEngine::new(dice),
            action.perform.clone(),
            event.resolve.clone(),
        );
        Self {
            player,
            action,
            event,
            movement,
            autopilot,
        }
    }
}

/// Apply an outcome's deltas and, when it names one that resolves, its
/// location change.
///
/// Shared by action and event resolution. A zone without a sub-zone lands the
/// player in that zone's first sub-zone; a sub-zone alone stays in the current
/// zone.
pub(crate) fn apply_outcome(
    player: &mut Player,
    catalog: &Catalog,
    outcome: &Outcome,
    now: DateTime<Utc>,
) {
    player.apply_deltas(&outcome.deltas);

    if !outcome.moves_player() {
        return;
    }

    let current = player.location().cloned();
    let zone_id = outcome
        .new_zone
        .clone()
        .or_else(|| current.as_ref().map(|l| l.zone_id.clone()));
    let Some(zone) = zone_id.as_ref().and_then(|id| catalog.zone(id)) else {
        tracing::warn!(player_id = %player.id(), zone = ?zone_id, "Outcome names unknown zone, not moving");
        return;
    };

    let sub_zone_id = match &outcome.new_sub_zone {
        Some(id) => Some(id.clone()),
        None if outcome.new_zone.is_some() => zone.sub_zones.first().map(|sz| sz.id.clone()),
        None => current.map(|l| l.sub_zone_id),
    };
    match sub_zone_id.filter(|id| zone.sub_zone(id).is_some()) {
        Some(sub_zone_id) => {
            let destination = Location {
                zone_id: zone.id.clone(),
                sub_zone_id,
            };
            tracing::debug!(player_id = %player.id(), to = ?destination, "Outcome moved player");
            player.move_to(destination, now);
        }
        None => {
            tracing::warn!(player_id = %player.id(), zone = %zone.id, "Outcome names unknown sub-zone, not moving");
        }
    }
}
