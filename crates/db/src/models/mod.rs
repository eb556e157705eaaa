pub mod field;
pub mod like;
pub mod project;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Accept either a JSON string or an integer primary key as an id.
///
/// The in-memory store uses string ids (`p-1`); a remote table may use
/// bigint keys. Both are carried as `String` so the API shape stays the same.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

/// Treat an explicit JSON `null` like a missing value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
