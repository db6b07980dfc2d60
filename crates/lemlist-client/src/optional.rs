//! Optional response fields that may be omitted but never `null`.
//!
//! Use with `#[serde(default, with = "lemlist_client::optional",
//! skip_serializing_if = "Option::is_none")]`. A missing key reads as
//! `None`; an explicit `null` is a decode error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    value.serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
