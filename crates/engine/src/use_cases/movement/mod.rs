//! Movement use cases: changing location and looking up zones.

mod get_zone;
mod move_player;

pub use get_zone::GetZone;
pub use move_player::MovePlayer;

use std::sync::Arc;

use crate::infrastructure::ports::ClockPort;
use crate::stores::GameStore;

/// Container for movement use cases.
pub struct MovementUseCases {
    pub move_player: Arc<MovePlayer>,
    pub get_zone: Arc<GetZone>,
}

impl MovementUseCases {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            move_player: Arc::new(MovePlayer::new(store.clone(), clock)),
            get_zone: Arc::new(GetZone::new(store)),
        }
    }
}
