//! Signed changes to a player's progress counters.

use serde::{Deserialize, Serialize};

/// Apply a percentage bonus to `value`, truncating toward zero.
///
/// `percent = 4` means `value * 1.04`. Integer arithmetic keeps the result
/// identical to per-stage float truncation without float error.
pub fn scale_percent(value: i64, percent: i64) -> i64 {
    value.saturating_mul(100 + percent) / 100
}

/// Deltas carried by an Outcome and recorded on a Decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deltas {
    #[serde(default, alias = "xp_change")]
    pub experience: i64,
    #[serde(default, alias = "money_change")]
    pub currency: i64,
    #[serde(default, alias = "influence_change")]
    pub influence: i64,
    #[serde(default, alias = "stress_change")]
    pub stress: i64,
}

impl Deltas {
    pub fn new(experience: i64, currency: i64, influence: i64, stress: i64) -> Self {
        Self {
            experience,
            currency,
            influence,
            stress,
        }
    }

    /// Scale the reward counters by `percent`; stress is never scaled.
    #[must_use]
    pub fn scale_rewards(self, percent: i64) -> Self {
        Self {
            experience: scale_percent(self.experience, percent),
            currency: scale_percent(self.currency, percent),
            influence: scale_percent(self.influence, percent),
            stress: self.stress,
        }
    }
}
