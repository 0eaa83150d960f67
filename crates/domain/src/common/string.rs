//! String conversion utilities.

use serde::{Deserialize, Deserializer};

/// Converts an empty `String` to `None`, otherwise returns `Some(value)`.
///
/// # Examples
///
/// ```
/// use vidaloka_domain::common::some_if_not_empty;
///
/// assert_eq!(some_if_not_empty("lapa".to_string()), Some("lapa".to_string()));
/// assert_eq!(some_if_not_empty(String::new()), None);
/// ```
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Serde helper for optional identifiers that content files write as `""`.
///
/// Missing, `null` and `""` all deserialize to `None`.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(some_if_not_empty).map(T::from))
}
