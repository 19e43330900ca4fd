//! Request-body deserialisation helpers.

use serde::{Deserialize, Deserializer};

/// Make an `Option` field's key mandatory while still allowing `null`.
///
/// serde fills a plain `Option<T>` field with `None` when its key is absent,
/// which would let clients silently drop fields. Routing the field through a
/// `deserialize_with` function disables that fallback: an absent key is a
/// deserialisation error, a `null` value is still `None`.
pub fn required<'de, T, D>(de: D) -> Result<Option<T>, D::Error>
where
  T: Deserialize<'de>,
  D: Deserializer<'de>,
{
  Option::<T>::deserialize(de)
}
