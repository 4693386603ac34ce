//! Civil dates keyed by Julian day number.
//!
//! The astronomy works in day numbers; everything Gregorian goes through
//! `chrono::NaiveDate`.

use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

/// JDN of 0000-12-31, the day before chrono's day 1 of the common era.
const CE_JDN_OFFSET: i32 = 1_721_425;

/// A civil date identified by its Julian day number (JDN).
///
/// JDN 2451545 is 2000-01-01 (Gregorian).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` from a Julian day number.
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }

    /// Returns the Julian day number of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` from a proleptic Gregorian calendar date.
    ///
    /// Returns `None` when `month`/`day` do not name a real day of that year
    /// (e.g. `2023-02-29`).
    ///
    /// # Example
    ///
    /// ```
    /// use ganzhi_calendar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_none());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// The date as a chrono date. Day numbers beyond chrono's range
    /// saturate at `NaiveDate::MIN`/`MAX`.
    pub fn naive(&self) -> NaiveDate {
        self.jdn
            .checked_sub(CE_JDN_OFFSET)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .unwrap_or(if self.jdn < CE_JDN_OFFSET {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            })
    }

    /// The date in the Gregorian calendar as `(year, month, day)`.
    pub fn gregorian(&self) -> (i32, u32, u32) {
        let naive = self.naive();
        (naive.year(), naive.month(), naive.day())
    }

    /// Formats the date as `YYYY-MM-DD`.
    pub fn iso_gregorian(&self) -> String {
        self.naive().format("%Y-%m-%d").to_string()
    }

    /// Day of week, `0` for Sunday through `6` for Saturday.
    pub fn weekday(&self) -> u32 {
        self.naive().weekday().num_days_from_sunday()
    }

    /// Sexagenary day number, `1` (甲子) to `60` (癸亥).
    ///
    /// ```
    /// use ganzhi_calendar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary()); // 戊午
    /// ```
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49).rem_euclid(60) as u32 + 1
    }

    /// Julian date (UT-agnostic) of the midnight opening this date.
    pub fn midnight_jd(&self) -> f64 {
        self.jdn as f64 - 0.5
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::from_jdn(date.num_days_from_ce() + CE_JDN_OFFSET)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}

impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gregorian() {
        assert_eq!(2440588, Date::from_gregorian(1970, 1, 1).unwrap().jdn());
        assert_eq!(2459466, Date::from_gregorian(2021, 9, 8).unwrap().jdn());
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(Date::from_gregorian(2024, 13, 1).is_none());
        assert!(Date::from_gregorian(2024, 4, 31).is_none());
        assert!(Date::from_gregorian(1900, 2, 29).is_none());
        assert!(Date::from_gregorian(2000, 2, 29).is_some());
    }

    #[test]
    fn to_gregorian() {
        assert_eq!((1970, 1, 1), Date::from_jdn(2440588).gregorian());
        assert_eq!((2021, 9, 8), Date::from_jdn(2459466).gregorian());
        assert_eq!("2000-01-01", Date::from_jdn(2451545).iso_gregorian());
    }

    #[test]
    fn weekdays() {
        // 1970-01-01 was a Thursday, 2000-01-01 a Saturday
        assert_eq!(4, Date::from_gregorian(1970, 1, 1).unwrap().weekday());
        assert_eq!(6, Date::from_gregorian(2000, 1, 1).unwrap().weekday());
        assert_eq!(0, Date::from_gregorian(2024, 6, 2).unwrap().weekday());
    }

    #[test]
    fn sexagenary_days() {
        assert_eq!(18, Date::from_gregorian(1970, 1, 1).unwrap().sexagenary());
        assert_eq!(56, Date::from_gregorian(2021, 9, 8).unwrap().sexagenary());
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn naive_round_trip() {
        let naive = NaiveDate::from_ymd_opt(1984, 2, 4).unwrap();
        assert_eq!(naive, Date::from(naive).naive());
        assert_eq!(NaiveDate::MIN, Date::from_jdn(i32::MIN).naive());
    }

    #[test]
    fn arithmetic() {
        let a = Date::from_gregorian(2000, 2, 28).unwrap();
        assert_eq!("2000-03-01", (a + 2).iso_gregorian());
        assert_eq!(-2, a - (a + 2));
    }
}
