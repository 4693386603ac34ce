//! Error types for the BaZi pipeline.
//!
//! Validation errors are the caller's fault and map to HTTP 400; adapter
//! errors are internal faults of the calendar collaborator and map to 500.

/// Result type for the BaZi pipeline
pub type BaziResult<T> = Result<T, BaziError>;

/// Malformed request body or date/time strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body could not be decoded as a JSON request object.
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// `birthDate` + `birthTime` do not match `YYYY-MM-DD HH:MM:SS`.
    #[error("invalid date/time format: {input:?} ({reason})")]
    InvalidDateTime { input: String, reason: String },
}

/// The calendar collaborator failed to produce or serialize its result.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Conversion or serialization failed inside the collaborator.
    #[error("failed to generate calendar json: {0}")]
    Generate(#[from] ganzhi_calendar::Error),

    /// The serialized output is not a JSON object.
    #[error("failed to parse calendar json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any failure of a BaZi computation.
#[derive(Debug, thiserror::Error)]
pub enum BaziError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}
