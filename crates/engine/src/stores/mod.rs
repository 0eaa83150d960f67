//! In-memory stores shared by the use cases.

mod game_store;

pub use game_store::GameStore;
