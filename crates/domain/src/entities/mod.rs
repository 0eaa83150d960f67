//! Catalog entities and the decision record.

mod action;
mod catalog;
mod character;
mod decision;
mod event;
mod outcome;
mod zone;

pub use action::{Action, FAVORITE_BONUS_PERCENT};
pub use catalog::Catalog;
pub use character::Character;
pub use decision::Decision;
pub use event::{parse_option_letter, Event, EventOption, MAX_OPTIONS, MIN_OPTIONS};
pub use outcome::Outcome;
pub use zone::{Location, SubZone, Zone};
