//! Engine error type.
//!
//! Every operation returns `GameError`; `kind()` folds the variants into the
//! five categories transport layers map to user-facing messages.

use thiserror::Error;
use vidaloka_domain::{ActionId, CharacterId, EventId, OptionId, PlayerId, SubZoneId, ZoneId};

use crate::infrastructure::ports::PersistenceError;

/// Coarse error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidState,
    Unavailable,
    PersistenceFailure,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
    #[error("Action not found: {0}")]
    ActionNotFound(ActionId),
    #[error("Event not found: {0}")]
    EventNotFound(EventId),
    #[error("Option not found: {0}")]
    OptionNotFound(String),
    #[error("Zone not found: {0}")]
    ZoneNotFound(ZoneId),
    #[error("Sub-zone not found: {zone_id}/{sub_zone_id}")]
    SubZoneNotFound {
        zone_id: ZoneId,
        sub_zone_id: SubZoneId,
    },

    #[error("Player already registered: {0}")]
    AlreadyRegistered(PlayerId),

    #[error("Player {0} has no character")]
    NoCharacter(PlayerId),
    #[error("Player {player_id} already plays {character_id}")]
    CharacterAlreadyAssigned {
        player_id: PlayerId,
        character_id: CharacterId,
    },
    #[error("Player {0} has no pending event")]
    NoPendingEvent(PlayerId),
    #[error("No eligible events for player {0}")]
    NoEligibleEvents(PlayerId),

    #[error("Action {action_id} is not available at {sub_zone_id}")]
    ActionUnavailable {
        action_id: ActionId,
        sub_zone_id: SubZoneId,
    },
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PlayerNotFound(_)
            | Self::CharacterNotFound(_)
            | Self::ActionNotFound(_)
            | Self::EventNotFound(_)
            | Self::OptionNotFound(_)
            | Self::ZoneNotFound(_)
            | Self::SubZoneNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyRegistered(_) => ErrorKind::AlreadyExists,
            Self::NoCharacter(_)
            | Self::CharacterAlreadyAssigned { .. }
            | Self::NoPendingEvent(_)
            | Self::NoEligibleEvents(_) => ErrorKind::InvalidState,
            Self::ActionUnavailable { .. } | Self::InvalidStatus(_) => ErrorKind::Unavailable,
            Self::Persistence(_) => ErrorKind::PersistenceFailure,
        }
    }

    pub fn option_not_found(option: &OptionId) -> Self {
        Self::OptionNotFound(option.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
