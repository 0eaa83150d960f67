//! Event use cases: selection, resolution, notification text.

mod notification;
mod resolve;
mod select;

pub use notification::format_event_notification;
pub use resolve::{EventResolution, ResolveEvent};
pub(crate) use resolve::log_resolution;
pub use select::SelectEvent;

use std::sync::Arc;

use crate::infrastructure::dice::Dice;
use crate::infrastructure::ports::ClockPort;
use crate::stores::GameStore;

/// Container for event use cases.
pub struct EventUseCases {
    pub select: Arc<SelectEvent>,
    pub resolve: Arc<ResolveEvent>,
}

impl EventUseCases {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>, dice: Dice) -> Self {
        Self {
            select: Arc::new(SelectEvent::new(store.clone(), clock.clone(), dice.clone())),
            resolve: Arc::new(ResolveEvent::new(store, clock, dice)),
        }
    }
}
