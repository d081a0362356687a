//! Composite snapshot of one instant in every supported representation

use crate::format::{iso_date_utc, iso_datetime_utc, iso_time_utc};
use crate::options::{FormatOptions, IsoFormat};
use isoutc_core::UtcInstant;
use serde::{Deserialize, Serialize};

/// Numeric fields plus all ten string variants of a single instant
///
/// Serializes with camelCase keys (`dateBasic`, `timeExtendedMs`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsoUtc {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub ms: u32,
    pub date_basic: String,
    pub date_extended: String,
    pub time_basic: String,
    pub time_basic_ms: String,
    pub time_extended: String,
    pub time_extended_ms: String,
    pub datetime_basic: String,
    pub datetime_basic_ms: String,
    pub datetime_extended: String,
    pub datetime_extended_ms: String,
}

impl IsoUtc {
    /// Build the snapshot from a single instant
    pub fn from_instant(instant: &UtcInstant) -> Self {
        tracing::trace!(millis = instant.as_unix_millis(), "building ISO snapshot");

        let c = instant.to_components();
        let basic = FormatOptions::basic();
        let extended = FormatOptions::extended();

        Self {
            year: c.year,
            month: c.month,
            day: c.day,
            hour: c.hour,
            minute: c.minute,
            second: c.second,
            ms: c.millisecond,
            date_basic: iso_date_utc(instant, IsoFormat::Basic),
            date_extended: iso_date_utc(instant, IsoFormat::Extended),
            time_basic: iso_time_utc(instant, basic.with_ms(false)),
            time_basic_ms: iso_time_utc(instant, basic),
            time_extended: iso_time_utc(instant, extended.with_ms(false)),
            time_extended_ms: iso_time_utc(instant, extended),
            datetime_basic: iso_datetime_utc(instant, basic.with_ms(false)),
            datetime_basic_ms: iso_datetime_utc(instant, basic),
            datetime_extended: iso_datetime_utc(instant, extended.with_ms(false)),
            datetime_extended_ms: iso_datetime_utc(instant, extended),
        }
    }

    /// Snapshot of the current time
    pub fn now() -> Self {
        Self::from_instant(&UtcInstant::now())
    }
}

impl From<UtcInstant> for IsoUtc {
    fn from(instant: UtcInstant) -> Self {
        Self::from_instant(&instant)
    }
}

impl From<&UtcInstant> for IsoUtc {
    fn from(instant: &UtcInstant) -> Self {
        Self::from_instant(instant)
    }
}

/// Snapshot of the current time
pub fn new_iso_utc() -> IsoUtc {
    IsoUtc::now()
}
