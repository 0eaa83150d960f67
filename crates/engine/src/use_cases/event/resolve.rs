//! Resolve event use case.
//!
//! A d20 roll plus the option's attribute is checked against its difficulty:
//! `roll + attribute >= difficulty` succeeds.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use vidaloka_domain::{
    parse_option_letter, Attribute, Catalog, Character, Decision, DecisionId, Event, EventId,
    EventOption, OptionId, Outcome, Player, PlayerId,
};

use crate::error::GameError;
use crate::infrastructure::dice::Dice;
use crate::infrastructure::ports::ClockPort;
use crate::stores::GameStore;
use crate::use_cases::apply_outcome;

/// Result of answering an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResolution {
    pub event_id: EventId,
    pub option_id: OptionId,
    pub attribute: Attribute,
    pub roll: i32,
    pub attribute_value: i32,
    pub difficulty: i32,
    pub success: bool,
    /// Outcome exactly as applied and recorded
    pub outcome: Outcome,
    pub decision_id: DecisionId,
}

impl EventResolution {
    pub fn total(&self) -> i32 {
        self.roll.saturating_add(self.attribute_value)
    }
}

pub struct ResolveEvent {
    store: Arc<GameStore>,
    clock: Arc<dyn ClockPort>,
    dice: Dice,
}

impl ResolveEvent {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>, dice: Dice) -> Self {
        Self { store, clock, dice }
    }

    /// Resolve `option_id` of `event_id` for the player.
    ///
    /// Clears the pending event when it is the one being answered. A
    /// follow-up event named by the outcome is recorded on the decision but
    /// not started.
    pub async fn execute(
        &self,
        player_id: &PlayerId,
        event_id: &EventId,
        option_id: &OptionId,
    ) -> Result<EventResolution, GameError> {
        let (now, decision_id) = self.stamp();

        let resolution = self
            .store
            .update_player(player_id, |player, catalog| {
                let event = catalog
                    .event(event_id)
                    .ok_or_else(|| GameError::EventNotFound(event_id.clone()))?;
                let option = event
                    .option(option_id)
                    .ok_or_else(|| GameError::option_not_found(option_id))?;
                self.answer(player, catalog, event, option, now, decision_id)
            })
            .await?;

        log_resolution(player_id, &resolution);
        Ok(resolution)
    }

    /// Answer the pending event with a lettered reply (`"a"`, `"/B"`).
    pub async fn execute_letter(
        &self,
        player_id: &PlayerId,
        reply: &str,
    ) -> Result<EventResolution, GameError> {
        let (now, decision_id) = self.stamp();

        let resolution = self
            .store
            .update_player(player_id, |player, catalog| {
                character_of(player, catalog)?;
                let event_id = player
                    .pending_event()
                    .ok_or_else(|| GameError::NoPendingEvent(player_id.clone()))?;
                let event = catalog
                    .event(event_id)
                    .ok_or_else(|| GameError::EventNotFound(event_id.clone()))?;
                let option = parse_option_letter(reply)
                    .and_then(|letter| event.option_by_letter(letter))
                    .ok_or_else(|| GameError::OptionNotFound(reply.trim().to_string()))?;
                self.answer(player, catalog, event, option, now, decision_id)
            })
            .await?;

        log_resolution(player_id, &resolution);
        Ok(resolution)
    }

    pub(crate) fn stamp(&self) -> (DateTime<Utc>, DecisionId) {
        (
            self.clock.now(),
            DecisionId::from_uuid(self.dice.random().gen_uuid()),
        )
    }

    /// Roll and apply `option` for a player already held under the write lock.
    pub(crate) fn answer(
        &self,
        player: &mut Player,
        catalog: &Catalog,
        event: &Event,
        option: &EventOption,
        now: DateTime<Utc>,
        decision_id: DecisionId,
    ) -> Result<EventResolution, GameError> {
        let character = character_of(player, catalog)?;
        let roll = self.dice.d20();
        let attribute_value = character.attribute(option.required_attribute);
        let success = option.is_success(roll, attribute_value);

        if player.pending_event() == Some(&event.id) {
            player.clear_pending_event();
        }

        let outcome = option.outcome(success).clone();
        apply_outcome(player, catalog, &outcome, now);

        let resolution = EventResolution {
            event_id: event.id.clone(),
            option_id: option.id.clone(),
            attribute: option.required_attribute,
            roll,
            attribute_value,
            difficulty: option.difficulty_level,
            success,
            outcome,
            decision_id,
        };
        let summary = format!(
            "roll {} vs {}: {}",
            resolution.total(),
            resolution.difficulty,
            if success { "success" } else { "failure" }
        );
        player.record_decision(Decision::for_event(
            decision_id,
            &event.id,
            &option.id,
            summary,
            resolution.outcome.deltas,
            resolution.outcome.next_event_id.clone(),
            now,
        ));
        Ok(resolution)
    }
}

fn character_of<'a>(player: &Player, catalog: &'a Catalog) -> Result<&'a Character, GameError> {
    let character_id = player
        .character_id()
        .ok_or_else(|| GameError::NoCharacter(player.id().clone()))?;
    catalog
        .character(character_id)
        .ok_or_else(|| GameError::CharacterNotFound(character_id.clone()))
}

pub(crate) fn log_resolution(player_id: &PlayerId, resolution: &EventResolution) {
    tracing::info!(
        player_id = %player_id,
        event_id = %resolution.event_id,
        option_id = %resolution.option_id,
        roll = resolution.roll,
        attribute = %resolution.attribute,
        total = resolution.total(),
        difficulty = resolution.difficulty,
        success = resolution.success,
        "Event resolved"
    );
}
