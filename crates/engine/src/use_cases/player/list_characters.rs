//! List characters use case.

use std::sync::Arc;

use vidaloka_domain::Character;

use crate::stores::GameStore;

pub struct ListCharacters {
    store: Arc<GameStore>,
}

impl ListCharacters {
    pub fn new(store: Arc<GameStore>) -> Self {
        Self { store }
    }

    /// Every playable character, sorted by id.
    pub async fn execute(&self) -> Vec<Character> {
        self.store
            .read(|state| state.catalog.characters().cloned().collect())
            .await
    }
}
