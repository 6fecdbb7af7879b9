//! Tolerant field decoders for upstream wire quirks.

use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TransportFlag {
    Bool(bool),
    Text(String),
}

/// Boolean sent either as JSON `true`/`false` or as the strings `"true"`/`"false"`.
///
/// `null` and `""` decode as `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<TransportFlag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(TransportFlag::Bool(value)) => Ok(value),
        Some(TransportFlag::Text(text)) => match text.trim() {
            "" | "false" | "False" | "FALSE" | "0" => Ok(false),
            "true" | "True" | "TRUE" | "1" => Ok(true),
            other => Err(D::Error::custom(format!(
                "expected boolean or boolean string, got {other:?}"
            ))),
        },
    }
}

/// Optional tag parsed with [`FromStr`]; `null`, a non-string value, or an unrecognized
/// tag decodes as `None`.
pub fn known_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text.parse().ok(),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Sequence that the upstream sometimes sends as a single object.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
    })
}
