//! Player use cases: registration, character choice, status.

mod assign_character;
mod get_status;
mod list_characters;
mod register;
mod set_status;

pub use assign_character::AssignCharacter;
pub use get_status::{GetStatus, LocationView, StatusSnapshot};
pub use list_characters::ListCharacters;
pub use register::RegisterPlayer;
pub use set_status::SetStatus;

use std::sync::Arc;

use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::settings::GameRules;
use crate::stores::GameStore;

/// Container for player use cases.
pub struct PlayerUseCases {
    pub register: Arc<RegisterPlayer>,
    pub list_characters: Arc<ListCharacters>,
    pub assign_character: Arc<AssignCharacter>,
    pub set_status: Arc<SetStatus>,
    pub get_status: Arc<GetStatus>,
}

impl PlayerUseCases {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>, rules: GameRules) -> Self {
        Self {
            register: Arc::new(RegisterPlayer::new(store.clone(), clock.clone(), rules.clone())),
            list_characters: Arc::new(ListCharacters::new(store.clone())),
            assign_character: Arc::new(AssignCharacter::new(store.clone(), clock.clone(), rules)),
            set_status: Arc::new(SetStatus::new(store.clone(), clock)),
            get_status: Arc::new(GetStatus::new(store)),
        }
    }
}
