//! Custom serde helpers for backend wire formats.

/// Deserializes JSON `null` as `T::default()`.
///
/// The backend encodes empty lists as `null` rather than `[]`.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Newtype for list responses that may arrive as `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NullableList<T>(pub Vec<T>);

impl<'de, T> serde::Deserialize<'de> for NullableList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        null_as_default::deserialize(deserializer).map(NullableList)
    }
}

impl<T> NullableList<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}
