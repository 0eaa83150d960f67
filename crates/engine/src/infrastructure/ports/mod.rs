//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - State persistence (could swap the JSON file for a database)
//! - Outbound messaging (could swap the log sender for a chat transport)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;
pub mod types;

pub use error::{MessagingError, PersistenceError};
pub use external::MessageSender;
pub use repos::StatePort;
pub use testing::{ClockPort, RandomPort};
pub use types::GameState;

#[cfg(test)]
pub use external::MockMessageSender;
#[cfg(test)]
pub use repos::MockStatePort;
