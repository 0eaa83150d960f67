//! Autopilot: the decision engine and the use case that plays for a player.

mod decision_engine;
mod run;

pub use decision_engine::{DecisionEngine, FAVORITE_PICK_PERCENT};
pub use run::{AutopilotStep, RunAutopilot};

use std::sync::Arc;

use crate::stores::GameStore;
use crate::use_cases::action::PerformAction;
use crate::use_cases::event::ResolveEvent;

/// Container for autopilot use cases.
pub struct AutopilotUseCases {
    pub run: Arc<RunAutopilot>,
}

impl AutopilotUseCases {
    pub fn new(
        store: Arc<GameStore>,
        engine: DecisionEngine,
        perform: Arc<PerformAction>,
        resolve: Arc<ResolveEvent>,
    ) -> Self {
        Self {
            run: Arc::new(RunAutopilot::new(store, engine, perform, resolve)),
        }
    }
}
