//! Action entity - a repeatable thing a player can do at a sub-zone.

use serde::{Deserialize, Serialize};

use super::{Character, Outcome, SubZone};
use crate::value_objects::Attribute;
use crate::{ActionId, ZoneId};

/// Flat bonus percentage for a character's favorite actions.
pub const FAVORITE_BONUS_PERCENT: i64 = 20;

/// A location-gated action with a deterministic, scaled outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Attribute whose score (as a percentage) boosts the rewards
    pub bonus_attribute: Attribute,
    pub base_outcome: Outcome,
    /// Informational only; availability is decided by `SubZone::available_actions`
    #[serde(default)]
    pub effective_zones: Vec<ZoneId>,
}

impl Action {
    pub fn new(
        id: impl Into<ActionId>,
        name: impl Into<String>,
        bonus_attribute: Attribute,
        base_outcome: Outcome,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            bonus_attribute,
            base_outcome,
            effective_zones: Vec::new(),
        }
    }

    /// Compute the outcome of `character` performing this action at `sub_zone`.
    ///
    /// Pure: no randomness. Rewards (experience, currency, influence) are
    /// scaled in a fixed order, each stage truncating toward zero:
    ///
    /// 1. attribute bonus: `+attribute%`
    /// 2. sub-zone reward multiplier: `+reward_multiplier%`
    /// 3. favorite bonus: `+20%` when the action is a favorite
    ///
    /// Stress deltas are never scaled.
    pub fn outcome_for(&self, character: &Character, sub_zone: &SubZone) -> Outcome {
        let attribute_percent = i64::from(character.attribute(self.bonus_attribute));

        let mut deltas = self
            .base_outcome
            .deltas
            .scale_rewards(attribute_percent)
            .scale_rewards(sub_zone.reward_multiplier);

        if character.is_favorite(&self.id) {
            deltas = deltas.scale_rewards(FAVORITE_BONUS_PERCENT);
        }

        Outcome {
            deltas,
            ..self.base_outcome.clone()
        }
    }
}
