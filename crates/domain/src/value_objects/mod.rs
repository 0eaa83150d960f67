//! Value objects shared by catalog entities and the player aggregate.

mod attribute;
mod deltas;
mod event_kind;
mod status;
mod stress;

pub use attribute::{Attribute, AttributeSet};
pub use deltas::{scale_percent, Deltas};
pub use event_kind::EventKind;
pub use status::PlayerStatus;
pub use stress::Stress;
