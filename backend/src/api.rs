//! Public API surface for the BaZi service.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object passed through from the calendar collaborator untouched.
pub type RawObject = Map<String, Value>;

/// Request body of `POST /bazi`.
///
/// Only a JSON object deserializes. Unknown fields are ignored; missing or
/// `null` fields read as empty; any other non-string field is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawObject")]
pub struct BaziRequest {
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "birthTime", default)]
    pub birth_time: Option<String>,
}

impl BaziRequest {
    pub fn new(birth_date: impl Into<String>, birth_time: Option<&str>) -> Self {
        Self {
            birth_date: Some(birth_date.into()),
            birth_time: birth_time.map(str::to_string),
        }
    }

    pub fn birth_date(&self) -> &str {
        self.birth_date.as_deref().unwrap_or_default()
    }

    pub fn birth_time(&self) -> &str {
        self.birth_time.as_deref().unwrap_or_default()
    }
}

impl TryFrom<RawObject> for BaziRequest {
    type Error = serde_json::Error;

    fn try_from(mut object: RawObject) -> Result<Self, Self::Error> {
        Ok(Self {
            birth_date: string_field(&mut object, "birthDate")?,
            birth_time: string_field(&mut object, "birthTime")?,
        })
    }
}

fn string_field(object: &mut RawObject, key: &str) -> Result<Option<String>, serde_json::Error> {
    object
        .remove(key)
        .map(serde_json::from_value::<Option<String>>)
        .transpose()
        .map(Option::flatten)
}

/// Success/failure envelope of every `/bazi` response.
///
/// Exactly one of `error` and `data` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }
}

/// One pillar split into its heavenly stem (`gan`) and earthly branch (`zhi`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub gan: String,
    pub zhi: String,
}

impl Pillar {
    /// Stem and branch joined back together.
    pub fn combined(&self) -> String {
        format!("{}{}", self.gan, self.zhi)
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

/// Payload of a successful `/bazi` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaziData {
    /// Split pillars.
    pub pillars: Pillars,
    /// The collaborator's `ganzhi` object with the unsplit strings.
    pub ganzhi_raw: RawObject,
    pub lunar: RawObject,
    pub solar: RawObject,
}
