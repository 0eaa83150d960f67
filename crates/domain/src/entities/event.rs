//! Narrative event entity and its options.
//!
//! An event is offered to a player when the eligibility gates pass; the
//! player then answers with one of 2-4 options, each resolved by a d20
//! attribute check.

use serde::{Deserialize, Serialize};

use super::Outcome;
use crate::error::DomainError;
use crate::value_objects::{Attribute, EventKind};
use crate::{EventId, OptionId, ZoneId};

/// Fewest options an event may carry.
pub const MIN_OPTIONS: usize = 2;
/// Most options an event may carry; one per letter `A`..`D`.
pub const MAX_OPTIONS: usize = 4;

const OPTION_LETTERS: [char; MAX_OPTIONS] = ['A', 'B', 'C', 'D'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "min_xp")]
    pub min_experience: i64,
    #[serde(default, alias = "min_money")]
    pub min_currency: i64,
    #[serde(default)]
    pub min_influence: i64,
    /// Zones where the event may fire. Empty means anywhere.
    #[serde(default, alias = "required_zone")]
    pub required_zones: Vec<ZoneId>,
    pub options: Vec<EventOption>,
    #[serde(default, alias = "type")]
    pub kind: EventKind,
}

impl Event {
    pub fn new(id: impl Into<EventId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            min_experience: 0,
            min_currency: 0,
            min_influence: 0,
            required_zones: Vec::new(),
            options: Vec::new(),
            kind: EventKind::Regular,
        }
    }

    pub fn with_minimums(mut self, experience: i64, currency: i64, influence: i64) -> Self {
        self.min_experience = experience;
        self.min_currency = currency;
        self.min_influence = influence;
        self
    }

    pub fn with_required_zone(mut self, zone_id: impl Into<ZoneId>) -> Self {
        self.required_zones.push(zone_id.into());
        self
    }

    pub fn with_option(mut self, option: EventOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Eligibility gate: every counter meets its minimum and, when the event
    /// is zone-restricted, the player stands in one of the listed zones.
    pub fn is_eligible(
        &self,
        experience: i64,
        currency: i64,
        influence: i64,
        zone: Option<&ZoneId>,
    ) -> bool {
        let meets_minimums = experience >= self.min_experience
            && currency >= self.min_currency
            && influence >= self.min_influence;

        let in_zone = self.required_zones.is_empty()
            || zone.is_some_and(|z| self.required_zones.contains(z));

        meets_minimums && in_zone
    }

    pub fn option(&self, id: &OptionId) -> Option<&EventOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// Option at the position named by `letter` (`A` is the first).
    pub fn option_by_letter(&self, letter: char) -> Option<&EventOption> {
        let upper = letter.to_ascii_uppercase();
        OPTION_LETTERS
            .iter()
            .position(|l| *l == upper)
            .and_then(|index| self.options.get(index))
    }

    /// Options paired with their display letters.
    pub fn lettered_options(&self) -> impl Iterator<Item = (char, &EventOption)> + '_ {
        OPTION_LETTERS.iter().copied().zip(self.options.iter())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.as_str().is_empty() {
            return Err(DomainError::validation("event id cannot be empty"));
        }
        let count = self.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(DomainError::validation(format!(
                "event {} has {count} options, expected {MIN_OPTIONS}-{MAX_OPTIONS}",
                self.id
            )));
        }
        Ok(())
    }
}

/// One answer to an event, checked against a character attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    pub id: OptionId,
    #[serde(alias = "text")]
    pub description: String,
    pub required_attribute: Attribute,
    pub difficulty_level: i32,
    pub success_outcome: Outcome,
    pub failure_outcome: Outcome,
}

impl EventOption {
    pub fn new(
        id: impl Into<OptionId>,
        description: impl Into<String>,
        required_attribute: Attribute,
        difficulty_level: i32,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            required_attribute,
            difficulty_level,
            success_outcome: Outcome::default(),
            failure_outcome: Outcome::default(),
        }
    }

    pub fn with_outcomes(mut self, success: Outcome, failure: Outcome) -> Self {
        self.success_outcome = success;
        self.failure_outcome = failure;
        self
    }

    /// `roll + attribute >= difficulty`
    pub fn is_success(&self, roll: i32, attribute_value: i32) -> bool {
        roll.saturating_add(attribute_value) >= self.difficulty_level
    }

    pub fn outcome(&self, success: bool) -> &Outcome {
        if success {
            &self.success_outcome
        } else {
            &self.failure_outcome
        }
    }
}

/// Parse a player's option reply (`"b"`, `"/C"`) into its letter.
///
/// Returns `None` for anything that is not a single letter `A`..`D`.
pub fn parse_option_letter(input: &str) -> Option<char> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let mut chars = trimmed.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !OPTION_LETTERS.contains(&letter) {
        return None;
    }
    Some(letter)
}
