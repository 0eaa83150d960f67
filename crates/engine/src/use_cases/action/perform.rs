//! Perform action use case.
//!
//! Deterministic: the scaled outcome depends only on the character, the
//! action and the sub-zone. Only the decision id draws on randomness.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use vidaloka_domain::{ActionId, Catalog, Decision, DecisionId, Outcome, Player, PlayerId};

use super::current_sub_zone;
use crate::error::GameError;
use crate::infrastructure::dice::Dice;
use crate::infrastructure::ports::ClockPort;
use crate::stores::GameStore;
use crate::use_cases::apply_outcome;

/// Result of performing an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResolution {
    pub action_id: ActionId,
    pub action_name: String,
    /// Outcome with scaled deltas, exactly as applied and recorded
    pub outcome: Outcome,
    pub decision_id: DecisionId,
}

pub struct PerformAction {
    store: Arc<GameStore>,
    clock: Arc<dyn ClockPort>,
    dice: Dice,
}

impl PerformAction {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>, dice: Dice) -> Self {
        Self { store, clock, dice }
    }

    /// Perform `action_id` where the player stands.
    ///
    /// Fails with `ActionUnavailable` when the current sub-zone does not offer
    /// it. On success exactly one decision is recorded.
    pub async fn execute(
        &self,
        player_id: &PlayerId,
        action_id: &ActionId,
    ) -> Result<ActionResolution, GameError> {
        let (now, decision_id) = self.stamp();
        let resolution = self
            .store
            .update_player(player_id, |player, catalog| {
                self.apply(player, catalog, action_id, now, decision_id)
            })
            .await?;

        log_action(player_id, &resolution);
        Ok(resolution)
    }

    pub(crate) fn stamp(&self) -> (DateTime<Utc>, DecisionId) {
        (
            self.clock.now(),
            DecisionId::from_uuid(self.dice.random().gen_uuid()),
        )
    }

    /// Perform the action on a player already held under the write lock.
    pub(crate) fn apply(
        &self,
        player: &mut Player,
        catalog: &Catalog,
        action_id: &ActionId,
        now: DateTime<Utc>,
        decision_id: DecisionId,
    ) -> Result<ActionResolution, GameError> {
        let character_id = player
            .character_id()
            .ok_or_else(|| GameError::NoCharacter(player.id().clone()))?;
        let character = catalog
            .character(character_id)
            .ok_or_else(|| GameError::CharacterNotFound(character_id.clone()))?;

        let sub_zone = current_sub_zone(player, catalog)?;
        if !sub_zone.offers(action_id) {
            return Err(GameError::ActionUnavailable {
                action_id: action_id.clone(),
                sub_zone_id: sub_zone.id.clone(),
            });
        }
        let action = catalog
            .action(action_id)
            .ok_or_else(|| GameError::ActionNotFound(action_id.clone()))?;

        let outcome = action.outcome_for(character, sub_zone);
        apply_outcome(player, catalog, &outcome, now);
        player.record_decision(Decision::for_action(
            decision_id,
            action_id,
            &action.name,
            outcome.deltas,
            now,
        ));

        Ok(ActionResolution {
            action_id: action_id.clone(),
            action_name: action.name.clone(),
            outcome,
            decision_id,
        })
    }
}

pub(crate) fn log_action(player_id: &PlayerId, resolution: &ActionResolution) {
    tracing::info!(
        player_id = %player_id,
        action_id = %resolution.action_id,
        experience = resolution.outcome.deltas.experience,
        currency = resolution.outcome.deltas.currency,
        influence = resolution.outcome.deltas.influence,
        stress = resolution.outcome.deltas.stress,
        "Action performed"
    );
}
