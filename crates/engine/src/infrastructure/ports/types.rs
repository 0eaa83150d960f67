//! Data carried across the ports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vidaloka_domain::{Catalog, Player, PlayerId};

/// Everything the engine persists: the player store plus the catalog it was
/// played against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub players: BTreeMap<PlayerId, Player>,
    #[serde(default)]
    pub catalog: Catalog,
}

impl GameState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            players: BTreeMap::new(),
            catalog,
        }
    }
}
