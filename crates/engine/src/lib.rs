//! Vida Loka engine library.
//!
//! The authoritative game state and everything that mutates it.
//!
//! ## Structure
//!
//! - `stores/` - The single locked game state and its persistence discipline
//! - `use_cases/` - One struct per player-facing operation
//! - `infrastructure/` - Ports, adapters, configuration and the event scheduler
//! - `app` - Application composition

pub mod app;
pub mod error;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Shared fakes and sample content for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use error::{ErrorKind, GameError};
