//! Outcome entity - the bundle of effects applied to a player.

use serde::{Deserialize, Serialize};

use crate::common::empty_as_none;
use crate::value_objects::Deltas;
use crate::{EventId, SubZoneId, ZoneId};

/// Narrative text plus the deltas and optional side effects of a resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub deltas: Deltas,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_zone: Option<ZoneId>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_sub_zone: Option<SubZoneId>,
    /// Follow-up event in a mission chain. Informational only: selection
    /// still goes through the eligibility filter.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_event_id: Option<EventId>,
}

impl Outcome {
    pub fn new(description: impl Into<String>, deltas: Deltas) -> Self {
        Self {
            description: description.into(),
            deltas,
            ..Default::default()
        }
    }

    pub fn with_location(mut self, zone: impl Into<ZoneId>, sub_zone: impl Into<SubZoneId>) -> Self {
        self.new_zone = Some(zone.into());
        self.new_sub_zone = Some(sub_zone.into());
        self
    }

    pub fn with_next_event(mut self, event_id: impl Into<EventId>) -> Self {
        self.next_event_id = Some(event_id.into());
        self
    }

    /// Whether applying this outcome asks for a location change.
    pub fn moves_player(&self) -> bool {
        self.new_zone.is_some() || self.new_sub_zone.is_some()
    }
}
