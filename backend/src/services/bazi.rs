//! The `/bazi` pipeline: parse the request, convert the moment, shape the
//! result.

use chrono::FixedOffset;
use serde_json::Value;
use tracing::debug;

use super::calendar_adapter::{fetch_calendar, CalendarProvider};
use super::response_shaper::shape;
use crate::api::{BaziData, BaziRequest};
use crate::error::{BaziResult, ValidationError};
use crate::models::BirthMoment;

/// Decodes a request body.
///
/// A bare `null` decodes as an empty request, which then fails date
/// validation.
///
/// # Errors
/// [`ValidationError::InvalidJson`] for anything that is not a JSON object
/// with string (or absent) `birthDate`/`birthTime` fields.
pub fn decode_request(body: &[u8]) -> Result<BaziRequest, ValidationError> {
    let invalid = |e: serde_json::Error| ValidationError::InvalidJson(e.to_string());
    match serde_json::from_slice::<Value>(body).map_err(invalid)? {
        Value::Null => Ok(BaziRequest::default()),
        value => serde_json::from_value(value).map_err(invalid),
    }
}

/// Computes the pillars for `request`, reading its moment in `offset`.
pub fn compute(
    provider: &dyn CalendarProvider,
    offset: FixedOffset,
    request: &BaziRequest,
) -> BaziResult<BaziData> {
    let moment = BirthMoment::parse(request.birth_date(), request.birth_time(), offset)?;
    debug!(moment = %moment.datetime(), "computing bazi");
    let raw = fetch_calendar(provider, &moment)?;
    Ok(shape(raw))
}
