//! Service layer: the request-to-payload pipeline, independent of HTTP.

pub mod bazi;
pub mod calendar_adapter;
mod lenient;
pub mod response_shaper;

pub use bazi::{compute, decode_request};
pub use calendar_adapter::{fetch_calendar, CalendarProvider, GanzhiCalendar, RawCalendar};
pub use response_shaper::{shape, split_ganzhi, GanzhiStrings};
