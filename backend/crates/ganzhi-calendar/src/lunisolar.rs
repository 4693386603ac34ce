//! Chinese lunisolar months.
//!
//! A suì (歲) runs from the month containing one winter solstice (month 11) to
//! the month before the next one. Months open on the civil date (UTC+8) of a
//! new moon. A suì of 13 months intercalates its first month that contains no
//! principal term (中氣).

use crate::astro::{lunation_before, new_moon, solar_term};
use crate::date::Date;
use crate::error::{Error, Result};
use crate::time_scales::{date_cst, Tt};

/// Month name; `Common` for a regular month, `Leap` for an intercalary one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// Month number regardless of leap status.
    pub fn num(&self) -> u32 {
        match *self {
            Month::Common(v) | Month::Leap(v) => v,
        }
    }

    pub fn is_leap(&self) -> bool {
        matches!(self, Month::Leap(_))
    }
}

/// Opening of a lunar month.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NewMoon {
    pub month: Month,
    pub date: Date,
}

/// A lunar day as `(lunar year, month, day of month)`.
pub type LunarDate = (i32, Month, u32);

/// One suì, numbered by the Gregorian year holding most of it.
#[derive(Debug, Clone)]
pub struct Annus {
    pub annus: i32,
    /// Instants of the 25 solar terms from the opening winter solstice to the
    /// closing one inclusive.
    pub solar_terms: Vec<Tt>,
    /// Month openings, ending with the next suì's month 11 as a sentinel.
    pub months: Vec<NewMoon>,
}

impl Annus {
    /// Builds the suì ending with the winter solstice of Gregorian `annus`.
    pub fn new(annus: i32) -> Result<Self> {
        let solar_terms: Vec<Tt> = (0..=24).map(|i| solar_term(annus - 1, i)).collect();
        let ws = date_cst(solar_terms[0]);
        let ws_next = date_cst(solar_terms[24]);

        // Two lunations of slack on each side keep the partition points valid
        // whatever the offset between mean and true new moons.
        let first = lunation_before(solar_terms[0]) - 1;
        let new_moon_dates: Vec<Date> = (first..first + 16)
            .map(|k| date_cst(new_moon(k)))
            .collect();

        let m11 = new_moon_dates.partition_point(|date| date <= &ws) - 1;
        let m11_next = new_moon_dates.partition_point(|date| date <= &ws_next) - 1;
        let mut needs_leap = match m11_next - m11 {
            12 => false,
            13 => true,
            n => {
                return Err(Error::Ephemeris(format!(
                    "{n} lunations between winter solstices of {annus}"
                )))
            }
        };

        let mut months = Vec::with_capacity(m11_next - m11 + 1);
        let mut month = 10;
        let mut term = 0;
        for i in m11..=m11_next {
            // No principal term before the next new moon: this month is leap.
            if needs_leap && i < m11_next && new_moon_dates[i + 1] <= date_cst(solar_terms[term]) {
                months.push(NewMoon {
                    month: Month::Leap(month),
                    date: new_moon_dates[i],
                });
                needs_leap = false;
                continue;
            }
            month = month % 12 + 1;
            months.push(NewMoon {
                month: Month::Common(month),
                date: new_moon_dates[i],
            });
            term = (term + 2).min(24);
        }
        if needs_leap {
            return Err(Error::Ephemeris(format!("no month without principal term in suì {annus}")));
        }

        Ok(Annus {
            annus,
            solar_terms,
            months,
        })
    }

    /// The suì containing `date`.
    pub fn from_date(date: Date) -> Result<Self> {
        let mut y = date.gregorian().0;
        for _ in 0..3 {
            let annus = Self::new(y)?;
            if date < annus.start() {
                y -= 1;
            } else if date >= annus.end() {
                y += 1;
            } else {
                return Ok(annus);
            }
        }
        Err(Error::Ephemeris(format!("no suì contains {}", date.iso_gregorian())))
    }

    /// First day of the suì.
    pub fn start(&self) -> Date {
        self.months[0].date
    }

    /// First day of the next suì.
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }

    /// Lunar `(year, month, day)` of `date`, or `None` when `date` lies outside
    /// this suì.
    ///
    /// Months 11 and 12 at the head of the suì belong to the previous lunar
    /// year.
    pub fn ymd_for(&self, date: Date) -> Option<LunarDate> {
        if date < self.start() || date >= self.end() {
            return None;
        }
        let m = self.months.iter().take_while(|m| m.date <= date).last()?;
        let day = (date - m.date + 1) as u32;
        let year = if m.month.num() >= 11 {
            self.annus - 1
        } else {
            self.annus
        };
        Some((year, m.month, day))
    }

    /// Leap months of this suì, excluding the trailing sentinel.
    pub fn leap_months(&self) -> impl Iterator<Item = Month> + '_ {
        self.months[..self.months.len() - 1]
            .iter()
            .map(|m| m.month)
            .filter(Month::is_leap)
    }
}

/// Number of the leap month of lunar year `year`, `0` when it has none.
///
/// A lunar year spans the tail of suì `year` (months 1 through 10) and the
/// head of suì `year + 1` (months 11 and 12).
pub fn leap_month_of_year(year: i32) -> Result<u32> {
    let own = Annus::new(year)?
        .leap_months()
        .find(|m| m.num() < 11)
        .map(|m| m.num());
    if let Some(num) = own {
        return Ok(num);
    }
    Ok(Annus::new(year + 1)?
        .leap_months()
        .find(|m| m.num() >= 11)
        .map(|m| m.num())
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn from_date() {
        for (expected, (y, m, d)) in [
            (2017, (2017, 1, 27)),
            (2017, (2017, 12, 17)),
            (2018, (2017, 12, 18)),
            (2000, (1999, 12, 31)),
        ] {
            assert_eq!(expected, Annus::from_date(date(y, m, d)).unwrap().annus);
        }
    }

    #[test]
    fn months_of_2000() {
        let annus = Annus::new(2000).unwrap();
        let expected = [
            (11, "1999-12-08"),
            (12, "2000-01-07"),
            (1, "2000-02-05"),
            (2, "2000-03-06"),
            (3, "2000-04-05"),
            (4, "2000-05-04"),
            (5, "2000-06-02"),
            (6, "2000-07-02"),
            (7, "2000-07-31"),
            (8, "2000-08-29"),
            (9, "2000-09-28"),
            (10, "2000-10-27"),
            (11, "2000-11-26"),
        ];
        assert_eq!(expected.len(), annus.months.len());
        for ((num, iso), month) in expected.iter().zip(&annus.months) {
            assert_eq!(Month::Common(*num), month.month);
            assert_eq!(*iso, month.date.iso_gregorian());
        }
    }

    #[test]
    fn leap_sixth_month_of_2017() {
        let expected = [
            (11i32, "2016-11-29"),
            (12, "2016-12-29"),
            (1, "2017-01-28"),
            (2, "2017-02-26"),
            (3, "2017-03-28"),
            (4, "2017-04-26"),
            (5, "2017-05-26"),
            (6, "2017-06-24"),
            (-6, "2017-07-23"),
            (7, "2017-08-22"),
            (8, "2017-09-20"),
            (9, "2017-10-20"),
            (10, "2017-11-18"),
            (11, "2017-12-18"),
        ];
        let annus = Annus::new(2017).unwrap();
        assert_eq!(expected.len(), annus.months.len());
        for ((num, iso), month) in expected.iter().zip(&annus.months) {
            let expected_month = if *num > 0 {
                Month::Common(*num as u32)
            } else {
                Month::Leap(num.unsigned_abs())
            };
            assert_eq!(
                (expected_month, iso.to_string()),
                (month.month, month.date.iso_gregorian())
            );
        }
    }

    #[test]
    fn lunar_dates() {
        use Month::*;
        let annus = Annus::new(2017).unwrap();
        for ((y, m, d), expected) in [
            ((2016, 11, 29), Some((2016, Common(11), 1))),
            ((2017, 1, 27), Some((2016, Common(12), 30))),
            ((2017, 1, 28), Some((2017, Common(1), 1))),
            ((2017, 7, 22), Some((2017, Common(6), 29))),
            ((2017, 7, 23), Some((2017, Leap(6), 1))),
            ((2017, 12, 17), Some((2017, Common(10), 30))),
            ((2016, 11, 28), None),
            ((2017, 12, 18), None),
        ] {
            assert_eq!(expected, annus.ymd_for(date(y, m, d)), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn new_year_2000_is_winter_month_25() {
        let d = date(2000, 1, 1);
        let annus = Annus::from_date(d).unwrap();
        assert_eq!(Some((1999, Month::Common(11), 25)), annus.ymd_for(d));
    }

    #[test]
    fn leap_month_lookup() {
        assert_eq!(6, leap_month_of_year(2017).unwrap());
        assert_eq!(4, leap_month_of_year(2020).unwrap());
        assert_eq!(0, leap_month_of_year(2019).unwrap());
    }
}
