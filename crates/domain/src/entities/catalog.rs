//! Content catalog - load-once lookup tables for all authored content.
//!
//! Built once at startup and never mutated afterwards. Maps are ordered so
//! that listing and random selection are reproducible for a given seed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Action, Character, Event, SubZone, Zone};
use crate::error::DomainError;
use crate::{ActionId, CharacterId, EventId, SubZoneId, ZoneId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    characters: BTreeMap<CharacterId, Character>,
    #[serde(default)]
    actions: BTreeMap<ActionId, Action>,
    #[serde(default)]
    zones: BTreeMap<ZoneId, Zone>,
    #[serde(default)]
    events: BTreeMap<EventId, Event>,
}

impl Catalog {
    /// Build a catalog from content records, rejecting duplicate ids and
    /// malformed events.
    pub fn from_parts(
        characters: Vec<Character>,
        actions: Vec<Action>,
        zones: Vec<Zone>,
        events: Vec<Event>,
    ) -> Result<Self, DomainError> {
        let catalog = Self {
            characters: index("character", characters, |c| c.id.clone())?,
            actions: index("action", actions, |a| a.id.clone())?,
            zones: index("zone", zones, |z| z.id.clone())?,
            events: index("event", events, |e| e.id.clone())?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for event in self.events.values() {
            event.validate()?;
        }
        for zone in self.zones.values() {
            if zone.sub_zones.is_empty() {
                return Err(DomainError::validation(format!(
                    "zone {} has no sub-zones",
                    zone.id
                )));
            }
        }
        Ok(())
    }

    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.get(id)
    }

    /// All characters, ordered by id.
    pub fn characters(&self) -> impl Iterator<Item = &Character> + '_ {
        self.characters.values()
    }

    pub fn action(&self, id: &ActionId) -> Option<&Action> {
        self.actions.get(id)
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> + '_ {
        self.actions.values()
    }

    pub fn zone(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.get(id)
    }

    pub fn zones(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.values()
    }

    pub fn sub_zone(&self, zone_id: &ZoneId, sub_zone_id: &SubZoneId) -> Option<&SubZone> {
        self.zone(zone_id).and_then(|z| z.sub_zone(sub_zone_id))
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.values()
    }

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.events.get(id)
    }

    /// Actions offered at a sub-zone, in the sub-zone's order. References
    /// to unknown actions are skipped.
    pub fn actions_at<'a>(&'a self, sub_zone: &'a SubZone) -> impl Iterator<Item = &'a Action> + 'a {
        sub_zone
            .available_actions
            .iter()
            .filter_map(|id| self.actions.get(id))
    }

    /// Events whose gates pass for the given counters and zone, ordered by id.
    pub fn eligible_events(
        &self,
        experience: i64,
        currency: i64,
        influence: i64,
        zone: Option<&ZoneId>,
    ) -> Vec<&Event> {
        self.events
            .values()
            .filter(|e| e.is_eligible(experience, currency, influence, zone))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
            && self.actions.is_empty()
            && self.zones.is_empty()
            && self.events.is_empty()
    }

    /// Record counts as `(characters, actions, zones, events)`.
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.characters.len(),
            self.actions.len(),
            self.zones.len(),
            self.events.len(),
        )
    }
}

fn index<K: Ord + std::fmt::Display, T>(
    kind: &'static str,
    records: Vec<T>,
    key: impl Fn(&T) -> K,
) -> Result<BTreeMap<K, T>, DomainError> {
    let mut map = BTreeMap::new();
    for record in records {
        let id = key(&record);
        if map.contains_key(&id) {
            return Err(DomainError::validation(format!("duplicate {kind} id: {id}")));
        }
        map.insert(id, record);
    }
    Ok(map)
}
