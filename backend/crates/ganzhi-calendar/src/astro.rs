//! Low-precision solar and lunar positions.
//!
//! Series from J. Meeus, *Astronomical Algorithms* (2nd ed.): the solar
//! coordinates of ch. 25 (about 0.01° in longitude, i.e. a quarter of an hour
//! for a solar term) and the true new moons of ch. 49 (well under a minute).

use std::f64::consts::PI;

use crate::time_scales::Tt;

/// JDE of J2000.0.
const J2000: f64 = 2451545.0;
/// Mean tropical year in days.
const TROPICAL_YEAR: f64 = 365.242_189;
/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_861;

fn sin_deg(deg: f64) -> f64 {
    (deg * PI / 180.0).sin()
}

fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Apparent geocentric ecliptic longitude of the sun in degrees `[0, 360)`.
pub fn sun_apparent_longitude(tt: Tt) -> f64 {
    let t = (tt.0 - J2000) / 36525.0;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * sin_deg(m)
        + (0.019993 - 0.000101 * t) * sin_deg(2.0 * m)
        + 0.000289 * sin_deg(3.0 * m);
    let omega = 125.04 - 1934.136 * t;
    normalize_deg(l0 + c - 0.00569 - 0.00478 * sin_deg(omega))
}

/// Instant (TT) at which the sun's apparent longitude reaches `longitude`
/// degrees, searching near `guess`.
///
/// `guess` must be within a few weeks of the answer.
pub fn sun_longitude_instant(longitude: f64, guess: Tt) -> Tt {
    let mut jde = guess.0;
    for _ in 0..8 {
        let diff = normalize_deg(longitude - sun_apparent_longitude(Tt(jde)) + 180.0) - 180.0;
        let step = diff * TROPICAL_YEAR / 360.0;
        jde += step;
        if step.abs() < 1e-7 {
            break;
        }
    }
    Tt(jde)
}

/// Instant (TT) of the `index`-th solar term of the suì opening with the
/// winter solstice of Gregorian `year`.
///
/// Index `0` is that winter solstice (sun at 270°), each following index adds
/// 15°, so `24` is the next winter solstice.
pub fn solar_term(year: i32, index: u32) -> Tt {
    let longitude = normalize_deg(270.0 + 15.0 * index as f64);
    // Winter solstice falls near Dec 21.75; terms follow at ~15.2 day steps.
    let solstice_guess = 2451534.5 + (year - 1999) as f64 * TROPICAL_YEAR + 0.25;
    let guess = solstice_guess + index as f64 * TROPICAL_YEAR / 24.0;
    sun_longitude_instant(longitude, Tt(guess))
}

/// Lunation number of the last mean new moon at or before `tt`, counted
/// from the new moon of 2000-01-06.
pub fn lunation_before(tt: Tt) -> i64 {
    ((tt.0 - 2451550.09766) / SYNODIC_MONTH).floor() as i64
}

/// Instant (TT) of the true new moon of lunation `k` (`0` = 2000-01-06).
pub fn new_moon(k: i64) -> Tt {
    let k = k as f64;
    let t = k / 1236.85;
    let (t2, t3, t4) = (t * t, t * t * t, t * t * t * t);

    let mean = 2451550.09766 + SYNODIC_MONTH * k + 0.00015437 * t2 - 0.000000150 * t3
        + 0.00000000073 * t4;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = 2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3;
    let mp = 201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3 - 0.000000058 * t4;
    let f = 160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3 + 0.000000011 * t4;
    let omega = 124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3;

    let periodic = -0.40720 * sin_deg(mp)
        + 0.17241 * e * sin_deg(m)
        + 0.01608 * sin_deg(2.0 * mp)
        + 0.01039 * sin_deg(2.0 * f)
        + 0.00739 * e * sin_deg(mp - m)
        - 0.00514 * e * sin_deg(mp + m)
        + 0.00208 * e * e * sin_deg(2.0 * m)
        - 0.00111 * sin_deg(mp - 2.0 * f)
        - 0.00057 * sin_deg(mp + 2.0 * f)
        + 0.00056 * e * sin_deg(2.0 * mp + m)
        - 0.00042 * sin_deg(3.0 * mp)
        + 0.00042 * e * sin_deg(m + 2.0 * f)
        + 0.00038 * e * sin_deg(m - 2.0 * f)
        - 0.00024 * e * sin_deg(2.0 * mp - m)
        - 0.00017 * sin_deg(omega)
        - 0.00007 * sin_deg(mp + 2.0 * m)
        + 0.00004 * sin_deg(2.0 * mp - 2.0 * f)
        + 0.00004 * sin_deg(3.0 * m)
        + 0.00003 * sin_deg(mp + m - 2.0 * f)
        + 0.00003 * sin_deg(2.0 * mp + 2.0 * f)
        - 0.00003 * sin_deg(mp + m + 2.0 * f)
        + 0.00003 * sin_deg(mp - m + 2.0 * f)
        - 0.00002 * sin_deg(mp - m - 2.0 * f)
        - 0.00002 * sin_deg(3.0 * mp + m)
        + 0.00002 * sin_deg(4.0 * mp);

    // (argument, coefficient) pairs of the planetary corrections
    let planetary = [
        (299.77 + 0.107408 * k - 0.009173 * t2, 0.000325),
        (251.88 + 0.016321 * k, 0.000165),
        (251.83 + 26.651886 * k, 0.000164),
        (349.42 + 36.412478 * k, 0.000126),
        (84.66 + 18.206239 * k, 0.000110),
        (141.74 + 53.303771 * k, 0.000062),
        (207.14 + 2.453732 * k, 0.000060),
        (154.84 + 7.306860 * k, 0.000056),
        (34.52 + 27.261239 * k, 0.000047),
        (207.19 + 0.121824 * k, 0.000042),
        (291.34 + 1.844379 * k, 0.000040),
        (161.72 + 24.198154 * k, 0.000037),
        (239.56 + 25.513099 * k, 0.000035),
        (331.55 + 3.592518 * k, 0.000023),
    ]
    .iter()
    .map(|&(arg, coeff)| coeff * sin_deg(arg))
    .sum::<f64>();

    Tt(mean + periodic + planetary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_scales::date_cst;

    #[test]
    fn sun_longitude_reference() {
        // Meeus example 25.a, 1992-10-13 0h TD
        let lon = sun_apparent_longitude(Tt(2448908.5));
        assert!((lon - 199.909).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn solstice_and_spring_start_dates() {
        assert_eq!("1999-12-22", date_cst(solar_term(1999, 0)).iso_gregorian());
        assert_eq!("2000-12-21", date_cst(solar_term(1999, 24)).iso_gregorian());
        // 立春 2000 at 2000-02-04 20:40 CST
        let lichun = solar_term(1999, 3);
        assert_eq!("2000-02-04", date_cst(lichun).iso_gregorian());
    }

    #[test]
    fn new_moon_dates() {
        // Meeus example 49.a: new moon of 1977-02-18, k = -283
        assert!((new_moon(-283).0 - 2443192.65118).abs() < 0.0005);
        assert_eq!("2000-01-07", date_cst(new_moon(0)).iso_gregorian());
        assert_eq!("1999-12-08", date_cst(new_moon(-1)).iso_gregorian());
    }

    #[test]
    fn lunation_lookup_brackets_instant() {
        let solstice = solar_term(2016, 0);
        let k = lunation_before(solstice);
        assert!(new_moon(k).0 <= solstice.0 + 1.0);
        assert!(new_moon(k + 1).0 > solstice.0 - 1.0);
    }
}
