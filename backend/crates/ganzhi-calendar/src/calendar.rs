//! Calendar facade: a solar timestamp and everything derived from it.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::astro::sun_apparent_longitude;
use crate::date::{is_leap_year, Date};
use crate::error::{Error, Result};
use crate::fmt;
use crate::lunisolar::{leap_month_of_year, Annus};
use crate::sexagenary;
use crate::time_scales::{Tt, Ut, CST_OFFSET_MINUTES};

/// First supported Gregorian year.
pub const MIN_YEAR: i32 = 1901;
/// Last supported Gregorian year.
pub const MAX_YEAR: i32 = 2099;

/// A solar (Gregorian) timestamp in China Standard Time.
///
/// Construction never fails; the conversion runs when the result is
/// requested through [`Calendar::snapshot`] or [`Calendar::to_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

/// Full conversion result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ganzhi: Ganzhi,
    pub lunar: Lunar,
    pub solar: Solar,
}

/// Stem-branch strings of the four pillars and their sexagenary orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ganzhi {
    pub year: String,
    pub year_order: u32,
    pub month: String,
    pub month_order: u32,
    pub day: String,
    pub day_order: u32,
    pub hour: String,
    pub hour_order: u32,
}

/// Lunar calendar fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lunar {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub is_leap_month: bool,
    /// Leap month of this lunar year, `0` when there is none.
    pub leap_month: u32,
    pub year_alias: String,
    pub month_alias: String,
    pub day_alias: String,
    pub hour_alias: String,
    pub animal: String,
    /// Most recent of the 24 solar terms.
    pub solar_term: String,
}

/// Solar calendar fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solar {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// `0` for Sunday through `6` for Saturday.
    pub week_number: u32,
    pub week_alias: String,
    pub is_leap: bool,
    pub constellation: String,
}

impl Calendar {
    /// Creates a calendar for a Gregorian timestamp in China Standard Time.
    pub fn by_solar(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Runs the conversion.
    ///
    /// # Errors
    /// `InvalidDate` when the fields do not name a real timestamp,
    /// `OutOfRange` outside [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn snapshot(&self) -> Result<Snapshot> {
        let date = self.validate()?;
        let seconds = self.hour * 3600 + self.minute * 60 + self.second;
        let tt = Tt::from(Ut::from_civil(date, seconds, CST_OFFSET_MINUTES));
        let longitude = sun_apparent_longitude(tt);

        Ok(Snapshot {
            ganzhi: self.ganzhi(date, longitude),
            lunar: self.lunar(date, longitude)?,
            solar: self.solar(date),
        })
    }

    /// Serializes [`Calendar::snapshot`] as a JSON object with `ganzhi`,
    /// `lunar` and `solar` members.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.snapshot()?)?)
    }

    fn validate(&self) -> Result<Date> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(Error::OutOfRange {
                year: self.year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        let invalid = || {
            Error::InvalidDate(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            ))
        };
        // Leap seconds are not civil timestamps here.
        if NaiveTime::from_hms_opt(self.hour, self.minute, self.second).is_none() {
            return Err(invalid());
        }
        Date::from_gregorian(self.year, self.month, self.day).ok_or_else(invalid)
    }

    fn ganzhi(&self, date: Date, longitude: f64) -> Ganzhi {
        let month_index = sexagenary::month_index(longitude);
        // January and early February before 立春 still belong to last year.
        let ganzhi_year = if self.month <= 2 && month_index >= 10 {
            self.year - 1
        } else {
            self.year
        };
        let year_order = sexagenary::year_order(ganzhi_year);
        let month_order = sexagenary::month_order(year_order, month_index);
        // The 子 hour from 23:00 opens the next day.
        let day_order = if self.hour >= 23 {
            (date + 1).sexagenary()
        } else {
            date.sexagenary()
        };
        let hour_order = sexagenary::hour_order(day_order, sexagenary::hour_branch(self.hour));

        Ganzhi {
            year: fmt::sexagenary(year_order),
            year_order,
            month: fmt::sexagenary(month_order),
            month_order,
            day: fmt::sexagenary(day_order),
            day_order,
            hour: fmt::sexagenary(hour_order),
            hour_order,
        }
    }

    fn lunar(&self, date: Date, longitude: f64) -> Result<Lunar> {
        let annus = Annus::from_date(date)?;
        let (year, month, day) = annus.ymd_for(date).ok_or_else(|| {
            Error::Ephemeris(format!("{} outside suì {}", date.iso_gregorian(), annus.annus))
        })?;
        let branch = sexagenary::hour_branch(self.hour) as usize;

        Ok(Lunar {
            year,
            month: month.num(),
            day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            is_leap_month: month.is_leap(),
            leap_month: leap_month_of_year(year)?,
            year_alias: fmt::year(year),
            month_alias: fmt::month(month),
            day_alias: fmt::day(day),
            hour_alias: format!("{}时", fmt::BRANCHES[branch]),
            animal: fmt::ANIMALS[(year - 4).rem_euclid(12) as usize].to_string(),
            solar_term: fmt::solar_term((longitude / 15.0).floor() as u32).to_string(),
        })
    }

    fn solar(&self, date: Date) -> Solar {
        let week_number = date.weekday();
        Solar {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            week_number,
            week_alias: fmt::weekday(week_number).to_string(),
            is_leap: is_leap_year(self.year),
            constellation: fmt::constellation(self.month, self.day).to_string(),
        }
    }
}
