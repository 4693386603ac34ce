//! Error types for ganzhi-calendar

use thiserror::Error;

/// Result type for calendar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when computing or exporting a calendar
#[derive(Error, Debug)]
pub enum Error {
    /// Fields do not name a real Gregorian timestamp
    #[error("Invalid solar date/time: {0}")]
    InvalidDate(String),

    /// Year outside the supported range
    #[error("Year {year} is outside the supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },

    /// Lunation or solar term data inconsistent for a year
    #[error("Ephemeris error: {0}")]
    Ephemeris(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
