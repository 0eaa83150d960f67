//! Domain model for the Vidaloka life-simulation engine.
//!
//! Pure data and rules: catalog content, the player aggregate, and the
//! arithmetic that turns an action or event choice into deltas. No async,
//! no I/O.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Player, StatusChange};
pub use entities::{
    parse_option_letter, Action, Catalog, Character, Decision, Event, EventOption, Location,
    Outcome, SubZone, Zone, FAVORITE_BONUS_PERCENT, MAX_OPTIONS, MIN_OPTIONS,
};
pub use error::DomainError;
pub use ids::{
    ActionId, CharacterId, DecisionId, EventId, OptionId, PlayerId, SubZoneId, ZoneId,
};
pub use value_objects::{
    scale_percent, Attribute, AttributeSet, Deltas, EventKind, PlayerStatus, Stress,
};
