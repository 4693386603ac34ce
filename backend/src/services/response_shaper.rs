//! Turns collaborator output into the `/bazi` payload.

use serde::Deserialize;
use serde_json::Value;

use super::calendar_adapter::RawCalendar;
use super::lenient;
use crate::api::{BaziData, Pillar, Pillars, RawObject};

/// The four pillar strings of a `ganzhi` section.
///
/// Missing or non-string entries read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GanzhiStrings {
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub day: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub hour: String,
}

impl GanzhiStrings {
    pub fn from_object(ganzhi: &RawObject) -> Self {
        // Every field is lenient, so this only fails on non-objects.
        serde_json::from_value(Value::Object(ganzhi.clone())).unwrap_or_default()
    }

    pub fn pillars(&self) -> Pillars {
        Pillars {
            year: split_ganzhi(&self.year),
            month: split_ganzhi(&self.month),
            day: split_ganzhi(&self.day),
            hour: split_ganzhi(&self.hour),
        }
    }
}

/// Splits a stem-branch pair such as `甲子` into its two characters.
///
/// Anything that is not exactly two characters is kept whole in `gan` with
/// an empty `zhi`.
pub fn split_ganzhi(value: &str) -> Pillar {
    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(gan), Some(zhi), None) => Pillar {
            gan: gan.to_string(),
            zhi: zhi.to_string(),
        },
        _ => Pillar {
            gan: value.to_string(),
            zhi: String::new(),
        },
    }
}

/// Builds the response payload. The `lunar` and `solar` sections pass
/// through untouched; `ganzhi` is kept whole as `ganzhi_raw`.
pub fn shape(raw: RawCalendar) -> BaziData {
    let pillars = GanzhiStrings::from_object(&raw.ganzhi).pillars();
    BaziData {
        pillars,
        ganzhi_raw: raw.ganzhi,
        lunar: raw.lunar,
        solar: raw.solar,
    }
}
