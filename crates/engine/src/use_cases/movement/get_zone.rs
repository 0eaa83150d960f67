//! Zone lookup use case.

use std::sync::Arc;

use vidaloka_domain::{Zone, ZoneId};

use crate::error::GameError;
use crate::stores::GameStore;

pub struct GetZone {
    store: Arc<GameStore>,
}

impl GetZone {
    pub fn new(store: Arc<GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, zone_id: &ZoneId) -> Result<Zone, GameError> {
        self.store
            .read(|state| state.catalog.zone(zone_id).cloned())
            .await
            .ok_or_else(|| GameError::ZoneNotFound(zone_id.clone()))
    }
}
