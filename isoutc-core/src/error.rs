//! Errors for instant construction, conversion and parsing
//!
//! Formatters and predicates never fail. Errors only come out of the
//! checked operations, and they are plain values carrying a
//! machine-readable code plus a hint for fixing the input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_DATE: &str = "INVALID_DATE";
    pub const INVALID_TIME: &str = "INVALID_TIME";
    pub const FORMAT_MISMATCH: &str = "FORMAT_MISMATCH";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const OVERFLOW: &str = "OVERFLOW";
}

/// Component validation errors raised while building a `UtcInstant`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstantError {
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid day: {0} for {1}/{2}")]
    InvalidDay(u32, u32, i32), // day, month, year

    #[error("Invalid hour: {0} (must be 0-23)")]
    InvalidHour(u32),

    #[error("Invalid minute: {0} (must be 0-59)")]
    InvalidMinute(u32),

    #[error("Invalid second: {0} (must be 0-59)")]
    InvalidSecond(u32),

    #[error("Invalid millisecond: {0} (must be 0-999)")]
    InvalidMillisecond(u32),

    #[error("Instant overflow: value out of supported range")]
    Overflow,
}

/// Structured error returned by checked conversions and parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// The input string that was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl IsoError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            input: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: record the offending input
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_date(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_DATE, format!("Invalid date: {}", details.into()))
            .with_suggestion("Check date components (year, month 1-12, day 1-31)")
    }

    pub fn invalid_time(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_TIME, format!("Invalid time: {}", details.into()))
            .with_suggestion("Check time components (hour 0-23, minute 0-59, second 0-59, ms 0-999)")
    }

    /// Input does not have the shape the operation requires
    pub fn format_mismatch(expected: &str, input: &str) -> Self {
        Self::new(codes::FORMAT_MISMATCH, format!("Expected {}, got {:?}", expected, input))
            .with_input(input)
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Use YYYYMMDDTHHMMSS[.mmm]Z or YYYY-MM-DDTHH:MM:SS[.mmm]Z")
    }

    pub fn overflow() -> Self {
        Self::new(codes::OVERFLOW, "Instant overflow")
            .with_suggestion("Value is out of the supported range")
    }
}

impl std::fmt::Display for IsoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for IsoError {}

impl From<InstantError> for IsoError {
    fn from(err: InstantError) -> Self {
        match err {
            InstantError::InvalidMonth(m) => Self::invalid_date(format!("month {} out of range 1-12", m)),
            InstantError::InvalidDay(d, m, y) => Self::invalid_date(format!("day {} invalid for {}/{}", d, m, y)),
            InstantError::InvalidHour(h) => Self::invalid_time(format!("hour {} out of range 0-23", h)),
            InstantError::InvalidMinute(m) => Self::invalid_time(format!("minute {} out of range 0-59", m)),
            InstantError::InvalidSecond(s) => Self::invalid_time(format!("second {} out of range 0-59", s)),
            InstantError::InvalidMillisecond(ms) => Self::invalid_time(format!("millisecond {} out of range 0-999", ms)),
            InstantError::Overflow => Self::overflow(),
        }
    }
}
