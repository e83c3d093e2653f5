//! Field decoders that treat odd shapes as "absent" instead of failing the whole body.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through; non-zero numbers and `true` are coerced to text.
/// `0`, `false`, null and containers are absent, like any other falsy value.
pub fn text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}

pub fn text_or_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text(de).map(Option::unwrap_or_default)
}

/// Numbers and numeric strings are accepted; non-finite values are absent.
pub fn number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|v| v.is_finite()))
}

/// `null` reads as an empty list. Elements that are not objects decode as `T::default()`.
pub fn list<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Some(values) = Option::<Vec<Value>>::deserialize(de)? else {
        return Ok(Vec::new());
    };
    values
        .into_iter()
        .map(|v| match v {
            Value::Object(_) => serde_json::from_value(v).map_err(D::Error::custom),
            _ => Ok(T::default()),
        })
        .collect()
}
