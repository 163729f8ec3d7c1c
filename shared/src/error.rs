//! Error types for the prayer-time calendar Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a calendar feed.
#[derive(Error, Debug)]
pub enum Error {
    /// Required request parameter missing or empty
    #[error("Missing parameters")]
    MissingParameters,

    /// Network or HTTP-level failure talking to the upstream time-service
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream body was not the expected JSON array of day records
    #[error("Invalid upstream payload: {0}")]
    UpstreamPayload(#[from] serde_json::Error),

    /// Clock string from upstream was not "HH:MM"
    #[error("Invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// Calendar date from upstream was not ISO-8601
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MissingParameters => 400,
            _ => 500,
        }
    }
}
