//! Player activity status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Who (if anyone) is driving a player right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    /// A human is playing; eligible for scheduled events.
    #[default]
    Active,
    /// Paused; the scheduler leaves the player alone.
    Sleeping,
    /// The decision engine plays on the player's behalf.
    Autopilot,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Sleeping => "sleeping",
            Self::Autopilot => "autopilot",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "sleeping" => Ok(Self::Sleeping),
            "autopilot" => Ok(Self::Autopilot),
            other => Err(DomainError::parse(format!("Unknown player status: {other}"))),
        }
    }
}
