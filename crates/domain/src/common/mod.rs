//! Common helpers shared by the catalog entities.
//!
//! Pure functions only - no side effects, no I/O.

pub mod string;

pub use string::{empty_as_none, some_if_not_empty};
