//! Run autopilot use case: one move on behalf of an unattended player.

use std::sync::Arc;

use vidaloka_domain::{Action, PlayerId, PlayerStatus};

use super::DecisionEngine;
use crate::error::GameError;
use crate::stores::GameStore;
use crate::use_cases::action::{current_sub_zone, log_action, ActionResolution, PerformAction};
use crate::use_cases::event::{log_resolution, EventResolution, ResolveEvent};

/// What one autopilot step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutopilotStep {
    ResolvedEvent(EventResolution),
    PerformedAction(ActionResolution),
    /// Nothing available to do where the player stands
    Idle,
}

pub struct RunAutopilot {
    store: Arc<GameStore>,
    engine: DecisionEngine,
    perform: Arc<PerformAction>,
    resolve: Arc<ResolveEvent>,
}

impl RunAutopilot {
    pub fn new(
        store: Arc<GameStore>,
        engine: DecisionEngine,
        perform: Arc<PerformAction>,
        resolve: Arc<ResolveEvent>,
    ) -> Self {
        Self {
            store,
            engine,
            perform,
            resolve,
        }
    }

    /// Answer the pending event if there is one, otherwise perform an action.
    ///
    /// Choosing and carrying out the move happen under one write lock, so a
    /// reply or status change from the player can never interleave with it.
    pub async fn execute(&self, player_id: &PlayerId) -> Result<AutopilotStep, GameError> {
        let (now, decision_id) = self.resolve.stamp();

        let step = self
            .store
            .update_player(player_id, |player, catalog| {
                if player.status() != PlayerStatus::Autopilot {
                    return Err(GameError::InvalidStatus(player.status().to_string()));
                }
                let character_id = player
                    .character_id()
                    .ok_or_else(|| GameError::NoCharacter(player_id.clone()))?;
                let character = catalog
                    .character(character_id)
                    .ok_or_else(|| GameError::CharacterNotFound(character_id.clone()))?;

                if let Some(event_id) = player.pending_event() {
                    let event = catalog
                        .event(event_id)
                        .ok_or_else(|| GameError::EventNotFound(event_id.clone()))?;
                    let Some(option) = self.engine.choose_option(character, event) else {
                        return Ok(AutopilotStep::Idle);
                    };
                    tracing::debug!(
                        player_id = %player_id,
                        event_id = %event.id,
                        option_id = %option.id,
                        "Autopilot answering event"
                    );
                    return self
                        .resolve
                        .answer(player, catalog, event, option, now, decision_id)
                        .map(AutopilotStep::ResolvedEvent);
                }

                let sub_zone = current_sub_zone(player, catalog)?;
                let available: Vec<&Action> = catalog.actions_at(sub_zone).collect();
                let Some(action) = self.engine.choose_action(character, &available) else {
                    return Ok(AutopilotStep::Idle);
                };
                tracing::debug!(
                    player_id = %player_id,
                    action_id = %action.id,
                    "Autopilot performing action"
                );
                self.perform
                    .apply(player, catalog, &action.id, now, decision_id)
                    .map(AutopilotStep::PerformedAction)
            })
            .await?;

        match &step {
            AutopilotStep::ResolvedEvent(resolution) => log_resolution(player_id, resolution),
            AutopilotStep::PerformedAction(resolution) => log_action(player_id, resolution),
            AutopilotStep::Idle => {
                tracing::debug!(player_id = %player_id, "Autopilot has nothing to do")
            }
        }
        Ok(step)
    }
}
