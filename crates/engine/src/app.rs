//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::dice::Dice;
use crate::infrastructure::event_scheduler::{EventScheduler, SchedulerSettings};
use crate::infrastructure::ports::{ClockPort, MessageSender, RandomPort};
use crate::infrastructure::settings::EngineConfig;
use crate::stores::GameStore;
use crate::use_cases::UseCases;

/// Main application state.
///
/// One store shared by every use case and the scheduler. A transport layer
/// holds an `Arc<App>` and calls into `use_cases`.
pub struct App {
    pub store: Arc<GameStore>,
    pub use_cases: UseCases,
    pub scheduler: EventScheduler,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        store: Arc<GameStore>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        sender: Arc<dyn MessageSender>,
        config: &EngineConfig,
    ) -> Self {
        let dice = Dice::new(random);
        let use_cases = UseCases::new(store.clone(), clock, dice.clone(), config.rules.clone());

        let scheduler = EventScheduler::new(
            store.clone(),
            use_cases.event.select.clone(),
            use_cases.autopilot.run.clone(),
            sender,
            dice,
            SchedulerSettings {
                interval: config.event_interval,
                probability: config.rules.event_probability,
                from_address: config.sender_address.clone(),
            },
        );

        Self {
            store,
            use_cases,
            scheduler,
        }
    }
}
