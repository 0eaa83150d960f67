//! Player aggregate - one person's progress through the game
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: counters, stress, pending event and history can only
//!   change through the methods below, which keep the invariants
//! - **Valid by construction**: stress is a clamped `Stress`, the character
//!   slot is write-once
//! - **Append-only history**: decisions are recorded, never edited

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::{Decision, Location};
use crate::error::DomainError;
use crate::value_objects::{Deltas, PlayerStatus, Stress};
use crate::{CharacterId, EventId, PlayerId};

/// A registered player.
///
/// # Invariants
///
/// - `stress` stays within `[0, 100]` after every mutation
/// - at most one pending event; starting a new one replaces the old
/// - `character_id` is set at most once
/// - `decisions` is append-only and ordered by non-decreasing timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    character_id: Option<CharacterId>,
    location: Option<Location>,
    experience: i64,
    currency: i64,
    influence: i64,
    stress: Stress,
    status: PlayerStatus,
    pending_event: Option<EventId>,
    decisions: Vec<Decision>,
    created_at: DateTime<Utc>,
    last_active_at: DateTime<Utc>,
    last_event_at: Option<DateTime<Utc>>,
}

/// Result of a status change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Changed {
        from: PlayerStatus,
        to: PlayerStatus,
    },
    Unchanged {
        status: PlayerStatus,
    },
}

impl Player {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Register a new player: zero stress, `active`, no character, no history.
    pub fn new(id: PlayerId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            character_id: None,
            location: None,
            experience: 0,
            currency: 0,
            influence: 0,
            stress: Stress::default(),
            status: PlayerStatus::Active,
            pending_event: None,
            decisions: Vec::new(),
            created_at: now,
            last_active_at: now,
            last_event_at: None,
        }
    }

    pub fn with_counters(mut self, experience: i64, currency: i64, influence: i64) -> Self {
        self.experience = experience;
        self.currency = currency;
        self.influence = influence;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn character_id(&self) -> Option<&CharacterId> {
        self.character_id.as_ref()
    }

    #[inline]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    #[inline]
    pub fn experience(&self) -> i64 {
        self.experience
    }

    #[inline]
    pub fn currency(&self) -> i64 {
        self.currency
    }

    #[inline]
    pub fn influence(&self) -> i64 {
        self.influence
    }

    #[inline]
    pub fn stress(&self) -> Stress {
        self.stress
    }

    #[inline]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    #[inline]
    pub fn pending_event(&self) -> Option<&EventId> {
        self.pending_event.as_ref()
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn last_active_at(&self) -> DateTime<Utc> {
        self.last_active_at
    }

    #[inline]
    pub fn last_event_at(&self) -> Option<DateTime<Utc>> {
        self.last_event_at
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Bind the player to a character and place them at its starting location.
    ///
    /// Fails if a character has already been assigned.
    pub fn assign_character(
        &mut self,
        character_id: CharacterId,
        start: Location,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if let Some(existing) = &self.character_id {
            return Err(DomainError::invalid_state_transition(format!(
                "player {} already plays {existing}",
                self.id
            )));
        }
        self.character_id = Some(character_id);
        self.location = Some(start);
        self.touch(now);
        Ok(())
    }

    /// Add the deltas to the counters. Stress is clamped into range.
    pub fn apply_deltas(&mut self, deltas: &Deltas) {
        self.experience = self.experience.saturating_add(deltas.experience);
        self.currency = self.currency.saturating_add(deltas.currency);
        self.influence = self.influence.saturating_add(deltas.influence);
        self.stress = self.stress.apply(deltas.stress);
    }

    pub fn move_to(&mut self, location: Location, now: DateTime<Utc>) {
        self.location = Some(location);
        self.touch(now);
    }

    pub fn set_status(&mut self, status: PlayerStatus, now: DateTime<Utc>) -> StatusChange {
        self.touch(now);
        if self.status == status {
            return StatusChange::Unchanged { status };
        }
        let from = self.status;
        self.status = status;
        StatusChange::Changed { from, to: status }
    }

    /// Make `event_id` the pending event, returning the one it replaced.
    pub fn begin_event(&mut self, event_id: EventId, now: DateTime<Utc>) -> Option<EventId> {
        let previous = self.pending_event.take();
        self.pending_event = Some(event_id);
        self.last_event_at = Some(now);
        self.touch(now);
        previous
    }

    pub fn clear_pending_event(&mut self) -> Option<EventId> {
        self.pending_event.take()
    }

    /// Append a decision. A timestamp earlier than the last recorded one is
    /// raised to it so the history stays ordered.
    pub fn record_decision(&mut self, mut decision: Decision) -> &Decision {
        if let Some(last) = self.decisions.last() {
            if decision.timestamp < last.timestamp {
                decision.timestamp = last.timestamp;
            }
        }
        self.touch(decision.timestamp);
        self.decisions.push(decision);
        &self.decisions[self.decisions.len() - 1]
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_active_at {
            self.last_active_at = now;
        }
    }
}

// ============================================================================
// Serde
// ============================================================================

#[derive(Serialize, Deserialize)]
struct PlayerWireFormat {
    id: PlayerId,
    name: String,
    #[serde(default)]
    character_id: Option<CharacterId>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    experience: i64,
    #[serde(default)]
    currency: i64,
    #[serde(default)]
    influence: i64,
    #[serde(default)]
    stress: Stress,
    #[serde(default)]
    status: PlayerStatus,
    #[serde(default)]
    pending_event: Option<EventId>,
    #[serde(default)]
    decisions: Vec<Decision>,
    created_at: DateTime<Utc>,
    last_active_at: DateTime<Utc>,
    #[serde(default)]
    last_event_at: Option<DateTime<Utc>>,
}

impl Serialize for Player {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = PlayerWireFormat {
            id: self.id.clone(),
            name: self.name.clone(),
            character_id: self.character_id.clone(),
            location: self.location.clone(),
            experience: self.experience,
            currency: self.currency,
            influence: self.influence,
            stress: self.stress,
            status: self.status,
            pending_event: self.pending_event.clone(),
            decisions: self.decisions.clone(),
            created_at: self.created_at,
            last_active_at: self.last_active_at,
            last_event_at: self.last_event_at,
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Player {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = PlayerWireFormat::deserialize(deserializer)?;

        let mut decisions = wire.decisions;
        decisions.sort_by_key(|d| d.timestamp);

        Ok(Player {
            id: wire.id,
            name: wire.name,
            character_id: wire.character_id,
            location: wire.location,
            experience: wire.experience,
            currency: wire.currency,
            influence: wire.influence,
            stress: wire.stress,
            status: wire.status,
            pending_event: wire.pending_event,
            decisions,
            created_at: wire.created_at,
            last_active_at: wire.last_active_at,
            last_event_at: wire.last_event_at,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionId, DecisionId};
    use chrono::Duration;

    fn player() -> Player {
        Player::new(PlayerId::new("5521999990000"), "Ana", Utc::now()).with_counters(0, 100, 0)
    }

    #[test]
    fn new_player_defaults() {
        let p = player();
        assert_eq!(p.status(), PlayerStatus::Active);
        assert_eq!(p.stress().value(), 0);
        assert_eq!(p.currency(), 100);
        assert!(p.character_id().is_none());
        assert!(p.location().is_none());
        assert!(p.decisions().is_empty());
    }

    #[test]
    fn character_is_assigned_once() {
        let mut p = player();
        let now = Utc::now();
        p.assign_character(CharacterId::new("hacker"), Location::new("centro", "lapa"), now)
            .unwrap();

        let err = p
            .assign_character(CharacterId::new("artist"), Location::new("sul", "praia"), now)
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        assert_eq!(p.character_id().unwrap().as_str(), "hacker");
        assert_eq!(p.location().unwrap().zone_id.as_str(), "centro");
    }

    #[test]
    fn stress_stays_in_bounds() {
        let mut p = player();
        for delta in [60, 60, -500, 30, 250, -10] {
            p.apply_deltas(&Deltas::new(0, 0, 0, delta));
            assert!((0..=100).contains(&p.stress().value()));
        }
        assert_eq!(p.stress().value(), 90);
    }

    #[test]
    fn begin_event_replaces_pending() {
        let mut p = player();
        let now = Utc::now();
        assert_eq!(p.begin_event(EventId::new("a"), now), None);
        assert_eq!(p.begin_event(EventId::new("b"), now), Some(EventId::new("a")));
        assert_eq!(p.pending_event(), Some(&EventId::new("b")));
        assert_eq!(p.last_event_at(), Some(now));
        assert_eq!(p.clear_pending_event(), Some(EventId::new("b")));
        assert!(p.pending_event().is_none());
    }

    #[test]
    fn set_status_reports_change() {
        let mut p = player();
        let now = Utc::now();
        assert_eq!(
            p.set_status(PlayerStatus::Autopilot, now),
            StatusChange::Changed {
                from: PlayerStatus::Active,
                to: PlayerStatus::Autopilot
            }
        );
        assert_eq!(
            p.set_status(PlayerStatus::Autopilot, now),
            StatusChange::Unchanged {
                status: PlayerStatus::Autopilot
            }
        );
    }

    #[test]
    fn decisions_keep_timestamp_order() {
        let mut p = player();
        let later = Utc::now();
        let earlier = later - Duration::seconds(30);
        let action = ActionId::new("trabalhar");

        p.record_decision(Decision::for_action(
            DecisionId::new(),
            &action,
            "Work",
            Deltas::default(),
            later,
        ));
        let recorded = p.record_decision(Decision::for_action(
            DecisionId::new(),
            &action,
            "Work",
            Deltas::default(),
            earlier,
        ));

        assert_eq!(recorded.timestamp, later);
        assert!(p
            .decisions()
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn serde_round_trip_preserves_player() {
        let mut p = player();
        p.assign_character(CharacterId::new("hacker"), Location::new("centro", "lapa"), Utc::now())
            .unwrap();
        p.begin_event(EventId::new("blitz"), Utc::now());
        p.apply_deltas(&Deltas::new(3, -5, 1, 12));

        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn deserialized_stress_is_clamped() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "stress": 250,
            "created_at": "2024-01-01T00:00:00Z",
            "last_active_at": "2024-01-01T00:00:00Z"
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.stress().value(), 100);
    }
}
