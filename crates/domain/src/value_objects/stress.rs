//! Stress gauge, always within [0, 100].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player stress level.
///
/// # Invariants
///
/// - The inner value is always within `Stress::MIN..=Stress::MAX`; every
///   constructor and mutation clamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Stress(i64);

impl Stress {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Apply a signed delta, clamping the result.
    #[must_use]
    pub fn apply(self, delta: i64) -> Self {
        Self::new(self.0.saturating_add(delta))
    }
}

impl From<i64> for Stress {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Stress> for i64 {
    fn from(value: Stress) -> Self {
        value.0
    }
}

impl fmt::Display for Stress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
