//! Adapter between the service and the calendar collaborator.
//!
//! The collaborator is asked for its serialized result, which is then read
//! back into [`RawCalendar`]: the three sections the service knows about,
//! each falling back to an empty object when absent or malformed.

use serde::Deserialize;
use tracing::debug;

use ganzhi_calendar::Calendar;

use super::lenient;
use crate::api::RawObject;
use crate::error::AdapterError;
use crate::models::BirthMoment;

/// Source of serialized calendar conversions.
///
/// Implementations must be pure functions of the moment; no caching is
/// layered on top.
pub trait CalendarProvider: Send + Sync {
    /// Converts `moment` and returns the collaborator's JSON document.
    fn calendar_json(&self, moment: &BirthMoment) -> Result<Vec<u8>, ganzhi_calendar::Error>;
}

/// [`CalendarProvider`] backed by the `ganzhi-calendar` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GanzhiCalendar;

impl CalendarProvider for GanzhiCalendar {
    fn calendar_json(&self, moment: &BirthMoment) -> Result<Vec<u8>, ganzhi_calendar::Error> {
        Calendar::by_solar(
            moment.year(),
            moment.month(),
            moment.day(),
            moment.hour(),
            moment.minute(),
            moment.second(),
        )
        .to_json()
    }
}

/// Collaborator output split into its known sections.
///
/// Deserializes only from a JSON object; a missing or non-object section
/// reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawObject")]
pub struct RawCalendar {
    pub ganzhi: RawObject,
    pub lunar: RawObject,
    pub solar: RawObject,
}

impl From<RawObject> for RawCalendar {
    fn from(mut object: RawObject) -> Self {
        let mut section = |key: &str| lenient::into_object(object.remove(key));
        Self {
            ganzhi: section("ganzhi"),
            lunar: section("lunar"),
            solar: section("solar"),
        }
    }
}

/// Runs the collaborator for `moment` and reads its output back.
///
/// # Errors
/// [`AdapterError::Generate`] when the collaborator fails,
/// [`AdapterError::Parse`] when its output is not a JSON object.
pub fn fetch_calendar(
    provider: &dyn CalendarProvider,
    moment: &BirthMoment,
) -> Result<RawCalendar, AdapterError> {
    let bytes = provider.calendar_json(moment)?;
    let raw: RawCalendar = serde_json::from_slice(&bytes)?;
    debug!(
        moment = %moment.datetime(),
        sections = raw.ganzhi.len() + raw.lunar.len() + raw.solar.len(),
        "calendar computed"
    );
    Ok(raw)
}
