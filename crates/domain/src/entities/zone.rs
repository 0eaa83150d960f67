//! Zone and SubZone entities - the fixed geography players move through.

use serde::{Deserialize, Serialize};

use crate::{ActionId, CharacterId, SubZoneId, ZoneId};

/// A geographic area owning an ordered list of sub-zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sub_zones: Vec<SubZone>,
    /// 1-10
    #[serde(default)]
    pub risk_level: i32,
    /// Percentage. Informational at zone level; the sub-zone value applies.
    #[serde(default)]
    pub reward_multiplier: i64,
    #[serde(default)]
    pub common_characters: Vec<CharacterId>,
}

impl Zone {
    pub fn new(id: impl Into<ZoneId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            sub_zones: Vec::new(),
            risk_level: 0,
            reward_multiplier: 0,
            common_characters: Vec::new(),
        }
    }

    pub fn with_sub_zone(mut self, sub_zone: SubZone) -> Self {
        self.sub_zones.push(sub_zone);
        self
    }

    pub fn sub_zone(&self, id: &SubZoneId) -> Option<&SubZone> {
        self.sub_zones.iter().find(|sz| &sz.id == id)
    }
}

/// A specific place inside a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubZone {
    pub id: SubZoneId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 1-10
    #[serde(default)]
    pub risk_level: i32,
    /// Percentage applied to action rewards (100 = double)
    #[serde(default)]
    pub reward_multiplier: i64,
    /// Actions legal here, in display order
    #[serde(default)]
    pub available_actions: Vec<ActionId>,
}

impl SubZone {
    pub fn new(id: impl Into<SubZoneId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            risk_level: 0,
            reward_multiplier: 0,
            available_actions: Vec::new(),
        }
    }

    pub fn with_reward_multiplier(mut self, percent: i64) -> Self {
        self.reward_multiplier = percent;
        self
    }

    pub fn with_action(mut self, action_id: impl Into<ActionId>) -> Self {
        self.available_actions.push(action_id.into());
        self
    }

    pub fn offers(&self, action_id: &ActionId) -> bool {
        self.available_actions.contains(action_id)
    }
}

/// A player's position: a zone plus one of its sub-zones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub zone_id: ZoneId,
    pub sub_zone_id: SubZoneId,
}

impl Location {
    pub fn new(zone_id: impl Into<ZoneId>, sub_zone_id: impl Into<SubZoneId>) -> Self {
        Self {
            zone_id: zone_id.into(),
            sub_zone_id: sub_zone_id.into(),
        }
    }
}
