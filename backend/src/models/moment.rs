//! Birth moment parsing.
//!
//! A request carries a date (`YYYY-MM-DD`) and an optional time (`HH:MM` or
//! `HH:MM:SS`). Both are joined and parsed against one fixed layout, then
//! pinned to an explicit UTC offset instead of any process-wide timezone.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike};

use crate::error::ValidationError;

/// Time of day used when the request omits `birthTime`.
pub const DEFAULT_BIRTH_TIME: &str = "12:00:00";

/// Combined layout of `birthDate` and the normalized `birthTime`.
pub const BIRTH_MOMENT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// China Standard Time, seconds east of UTC.
pub const CHINA_STANDARD_TIME_SECS: i32 = 8 * 3600;

/// The fixed regional offset all birth moments are read in (UTC+08:00).
pub fn china_standard_time() -> FixedOffset {
    FixedOffset::east_opt(CHINA_STANDARD_TIME_SECS)
        .unwrap_or_else(|| unreachable!("UTC+8 is within ±24h"))
}

/// A fully resolved civil timestamp in a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMoment(DateTime<FixedOffset>);

impl BirthMoment {
    /// Parses `date` and `time` in `offset`.
    ///
    /// An empty `time` becomes [`DEFAULT_BIRTH_TIME`]; `HH:MM` gains `:00`.
    ///
    /// # Errors
    /// [`ValidationError::InvalidDateTime`] when the combined string does not
    /// match [`BIRTH_MOMENT_LAYOUT`] or names an impossible date.
    pub fn parse(date: &str, time: &str, offset: FixedOffset) -> Result<Self, ValidationError> {
        let input = format!("{} {}", date, normalize_time(time));
        if !has_layout_shape(&input) {
            return Err(ValidationError::InvalidDateTime {
                input,
                reason: "expected YYYY-MM-DD HH:MM:SS".to_string(),
            });
        }
        let naive = NaiveDateTime::parse_from_str(&input, BIRTH_MOMENT_LAYOUT).map_err(|e| {
            ValidationError::InvalidDateTime {
                input: input.clone(),
                reason: e.to_string(),
            }
        })?;
        // chrono reads second 60 as a leap second.
        if naive.nanosecond() != 0 {
            return Err(ValidationError::InvalidDateTime {
                input,
                reason: "leap seconds are not supported".to_string(),
            });
        }
        let moment = offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| ValidationError::InvalidDateTime {
                input,
                reason: "ambiguous local time".to_string(),
            })?;
        Ok(Self(moment))
    }

    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

/// Zero-padded digits and separators of [`BIRTH_MOMENT_LAYOUT`]; `0` marks a
/// digit.
const LAYOUT_SHAPE: &[u8; 19] = b"0000-00-00 00:00:00";

/// Whether `input` has exactly the fixed-width shape of the layout. chrono
/// alone also accepts unpadded fields, signs and extra whitespace.
fn has_layout_shape(input: &str) -> bool {
    input.len() == LAYOUT_SHAPE.len()
        && input
            .bytes()
            .zip(LAYOUT_SHAPE)
            .all(|(byte, &shape)| match shape {
                b'0' => byte.is_ascii_digit(),
                separator => byte == separator,
            })
}

/// Fills in a missing time of day or missing seconds.
pub fn normalize_time(time: &str) -> Cow<'_, str> {
    if time.is_empty() {
        Cow::Borrowed(DEFAULT_BIRTH_TIME)
    } else if time.split(':').count() == 2 {
        Cow::Owned(format!("{time}:00"))
    } else {
        Cow::Borrowed(time)
    }
}
