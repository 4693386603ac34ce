//! Time scales used by the calendar computation.
//!
//! The astronomical series produce instants in Terrestrial Time (TT); civil
//! dates need Universal Time (UT). The two differ by ΔT, which is estimated
//! from polynomial fits to historical observations and extrapolations.

use crate::date::Date;

/// China Standard Time, minutes east of UTC.
pub const CST_OFFSET_MINUTES: i32 = 480;

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JDE).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time),
/// represented in Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl From<Tt> for Ut {
    fn from(tt: Tt) -> Ut {
        Ut(tt.0 - delta_t(tt.0) / 86400.0)
    }
}

impl From<Ut> for Tt {
    fn from(ut: Ut) -> Tt {
        Tt(ut.0 + delta_t(ut.0) / 86400.0)
    }
}

impl Ut {
    /// Instant of a civil timestamp given in a zone `tz_offset_minutes` east
    /// of UTC.
    pub fn from_civil(date: Date, seconds_of_day: u32, tz_offset_minutes: i32) -> Ut {
        Ut(date.midnight_jd() + seconds_of_day as f64 / 86400.0
            - tz_offset_minutes as f64 / 1440.0)
    }

    /// The civil date at this instant in a zone `tz_offset_minutes` east of
    /// UTC. For Beijing time (UTC+8) pass `CST_OFFSET_MINUTES`.
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Date {
        // JD starts at noon; the epsilon keeps an exact civil midnight from
        // landing on the previous day after float round-off.
        let local = self.0 + tz_offset_minutes as f64 / 1440.0 + 0.5;
        Date::from_jdn((local + 1e-9).floor() as i32)
    }
}

/// Civil date in China Standard Time of a TT instant.
pub fn date_cst(tt: Tt) -> Date {
    Ut::from(tt).date_in_timezone(CST_OFFSET_MINUTES)
}

/// ΔT = TT − UT in seconds, for the instant with Julian date `jd`.
///
/// Piecewise polynomials of Espenak & Meeus; the error is well below a
/// minute across the twentieth and twenty-first centuries.
pub fn delta_t(jd: f64) -> f64 {
    let y = 2000.0 + (jd - 2451544.5) / 365.2425;
    match y {
        y if y < 1900.0 => long_term(y),
        y if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                - 0.000197 * t.powi(4)
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t.powi(2)
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_t_reference_values() {
        // Observed ΔT: ~63.8s in 2000, ~69.4s in 2020, ~24s in 1930
        assert!((delta_t(2451545.0) - 63.8).abs() < 1.0);
        assert!((delta_t(2458850.0) - 69.4).abs() < 3.0);
        assert!((delta_t(2426000.0) - 24.0).abs() < 2.0);
    }

    #[test]
    fn delta_t_is_continuous_at_2050() {
        let before = delta_t(2469807.0 - 0.01);
        let after = delta_t(2469807.0 + 0.01);
        assert!((before - after).abs() < 2.0);
    }

    #[test]
    fn civil_round_trip() {
        let date = Date::from_gregorian(2000, 1, 1).unwrap();
        let ut = Ut::from_civil(date, 0, CST_OFFSET_MINUTES);
        // 2000-01-01 00:00 CST is 1999-12-31 16:00 UT
        assert!((ut.0 - 2451544.1666667).abs() < 1e-6);
        assert_eq!(date, ut.date_in_timezone(CST_OFFSET_MINUTES));
        assert_eq!((1999, 12, 31), ut.date_in_timezone(0).gregorian());

        let late = Ut::from_civil(date, 86399, CST_OFFSET_MINUTES);
        assert_eq!(date, late.date_in_timezone(CST_OFFSET_MINUTES));
    }

    #[test]
    fn tt_ut_conversion() {
        let tt = Tt(2451545.0);
        let ut = Ut::from(tt);
        let back = Tt::from(ut);
        assert!((tt.0 - back.0).abs() < 1e-8);
        assert!(ut.0 < tt.0);
    }
}
