//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus the
//! background event scheduler.

pub mod clock;
pub mod dice;
pub mod event_scheduler;
pub mod importers;
pub mod messaging;
pub mod persistence;
pub mod ports;
pub mod settings;
