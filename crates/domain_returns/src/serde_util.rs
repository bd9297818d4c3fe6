//! Serde helpers for loosely populated commerce API payloads

use serde::{Deserialize, Deserializer};

/// Deserializes an optional list, mapping `null` to an empty `Vec`.
///
/// Pair with `#[serde(default)]` so that a missing field is also empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
