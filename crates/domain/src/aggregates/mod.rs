//! Aggregate roots - domain objects that own their related data
//!
//! Fields are private and every mutation goes through a method that keeps
//! the aggregate's invariants. Mutations that can be no-ops report what
//! happened through a small result enum instead of a bool.

pub mod player;

pub use player::{Player, StatusChange};
