//! Character template - the immutable archetype a player plays as.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::empty_as_none;
use crate::value_objects::{Attribute, AttributeSet};
use crate::{ActionId, CharacterId, SubZoneId, ZoneId};

/// A playable character template loaded from content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Free-form category tag (e.g. "hacker", "artist")
    #[serde(default, alias = "type")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub attributes: AttributeSet,
    /// Actions that earn the favorite bonus and that autopilot prefers
    #[serde(default)]
    pub favorite_actions: BTreeSet<ActionId>,
    #[serde(default)]
    pub natural_predators: Vec<String>,
    #[serde(default)]
    pub evolution_paths: Vec<String>,
    /// Where a player starts after picking this character. Falls back to
    /// the configured default location when absent.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub starting_zone: Option<ZoneId>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub starting_sub_zone: Option<SubZoneId>,
}

impl Character {
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            description: String::new(),
            attributes,
            favorite_actions: BTreeSet::new(),
            natural_predators: Vec::new(),
            evolution_paths: Vec::new(),
            starting_zone: None,
            starting_sub_zone: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_favorite(mut self, action_id: impl Into<ActionId>) -> Self {
        self.favorite_actions.insert(action_id.into());
        self
    }

    pub fn with_starting_location(
        mut self,
        zone: impl Into<ZoneId>,
        sub_zone: impl Into<SubZoneId>,
    ) -> Self {
        self.starting_zone = Some(zone.into());
        self.starting_sub_zone = Some(sub_zone.into());
        self
    }

    #[inline]
    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    pub fn is_favorite(&self, action_id: &ActionId) -> bool {
        self.favorite_actions.contains(action_id)
    }

    /// Configured starting location, only when both halves are present.
    pub fn starting_location(&self) -> Option<(&ZoneId, &SubZoneId)> {
        self.starting_zone.as_ref().zip(self.starting_sub_zone.as_ref())
    }
}
