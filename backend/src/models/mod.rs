//! Domain models.

pub mod moment;

pub use moment::{china_standard_time, BirthMoment};
