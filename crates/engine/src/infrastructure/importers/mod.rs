//! Content importers.

mod json_content;

pub use json_content::{ContentError, JsonContentLoader};
