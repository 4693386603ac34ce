//! # ganzhi-calendar
//!
//! Converts a Gregorian timestamp in China Standard Time into the Chinese
//! lunisolar calendar and the four sexagenary pillars (year, month, day,
//! hour).
//!
//! Solar terms and new moons come from low-precision analytic series rather
//! than tabulated ephemerides, which keeps placements correct to the day for
//! the supported years [`MIN_YEAR`]..=[`MAX_YEAR`] except for events within
//! minutes of local midnight.
//!
//! ## Example
//!
//! ```
//! use ganzhi_calendar::Calendar;
//!
//! let snapshot = Calendar::by_solar(2000, 1, 1, 0, 0, 0).snapshot().unwrap();
//! assert_eq!("己卯", snapshot.ganzhi.year);
//! assert_eq!("戊午", snapshot.ganzhi.day);
//! assert_eq!((1999, 11, 25), (snapshot.lunar.year, snapshot.lunar.month, snapshot.lunar.day));
//!
//! let json = Calendar::by_solar(2000, 1, 1, 0, 0, 0).to_json().unwrap();
//! assert!(json.starts_with(b"{\"ganzhi\""));
//! ```

pub mod astro;
pub mod date;
pub mod fmt;
pub mod lunisolar;
pub mod sexagenary;
pub mod time_scales;

mod calendar;
mod error;

pub use calendar::{Calendar, Ganzhi, Lunar, Snapshot, Solar, MAX_YEAR, MIN_YEAR};
pub use date::Date;
pub use error::{Error, Result};
