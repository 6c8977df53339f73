use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when an outage cannot be built, queried or formatted.
///
/// `code` is a stable `OUTAGE_*` identifier callers can match on; `details` carries the
/// offending raw value. Nothing in this crate is retryable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Construction was handed something that is neither absent nor a mapping.
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::new(
            "OUTAGE_INVALID_INPUT",
            "Outage input must be absent, a mapping, or an object-like structure",
        )
        .with_details(details)
    }

    /// A reference time that is not a positive unix timestamp.
    pub fn invalid_time(time: i64) -> Self {
        Self::new(
            "OUTAGE_INVALID_TIME",
            "Reference time must be a positive unix timestamp",
        )
        .with_details(format!("time={time}"))
    }

    pub fn field_parse_failed(field: &str, details: impl Into<String>) -> Self {
        Self::new(
            "OUTAGE_FIELD_PARSE_FAILED",
            format!("Failed to parse outage field {field}"),
        )
        .with_details(details)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
