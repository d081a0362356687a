//! isoutc Core - Fundamental types
//!
//! This crate provides the core types used throughout isoutc:
//! - `UtcInstant`: Millisecond-precision point in time in UTC
//! - `InstantError`: Component validation errors
//! - `IsoError`: Structured errors for checked conversions and parsing

mod instant;
mod error;

pub use instant::{
    UtcInstant, InstantComponents, is_leap_year, days_in_month,
    MILLIS_PER_SECOND, MILLIS_PER_MINUTE, MILLIS_PER_HOUR, MILLIS_PER_DAY,
};
pub use error::{InstantError, IsoError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{UtcInstant, InstantComponents, InstantError, IsoError};
    pub use crate::error::codes;
}
