//! Readers that never fail on a wrong JSON type.
//!
//! The calendar collaborator's sections are trusted to be present but not to
//! be well-formed; a value of the wrong type reads as empty.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::api::RawObject;

/// A JSON object as-is; anything else, or nothing, as an empty object.
pub fn into_object(value: Option<Value>) -> RawObject {
    match value {
        Some(Value::Object(map)) => map,
        _ => RawObject::new(),
    }
}

/// Any JSON string as-is; any other value as an empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}
