//! UtcInstant: a millisecond-precision point in time in UTC
//!
//! Design principles:
//! - No external datetime crates
//! - Gregorian proleptic calendar
//! - UTC only, no offsets
//! - Never panics - constructors return Results, accessors are total

use crate::InstantError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Constants
// ============================================================================

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Days in each month (non-leap year)
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

// ============================================================================
// UtcInstant
// ============================================================================

/// A point in time with millisecond precision
///
/// Internally stores milliseconds since the Unix epoch
/// (1970-01-01T00:00:00Z). Calendar and clock fields are derived on
/// demand and always fall in their documented ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UtcInstant {
    /// Milliseconds since Unix epoch (negative for pre-1970 instants)
    millis: i64,
}

impl UtcInstant {
    // ========== Construction ==========

    /// Create an instant from milliseconds since Unix epoch
    pub fn from_unix_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Create an instant from seconds since Unix epoch
    pub fn from_unix_secs(secs: i64) -> Result<Self, InstantError> {
        secs.checked_mul(MILLIS_PER_SECOND)
            .map(Self::from_unix_millis)
            .ok_or(InstantError::Overflow)
    }

    /// Create an instant from a `SystemTime`, truncating towards the past
    /// to whole milliseconds
    pub fn from_system_time(time: SystemTime) -> Result<Self, InstantError> {
        let millis = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).map_err(|_| InstantError::Overflow)?,
            Err(err) => {
                let before = err.duration();
                let mut millis = before.as_millis();
                if before.subsec_nanos() % 1_000_000 != 0 {
                    millis += 1;
                }
                let millis = i64::try_from(millis).map_err(|_| InstantError::Overflow)?;
                -millis
            }
        };
        Ok(Self { millis })
    }

    /// Current UTC time from the system clock
    ///
    /// A clock reading outside the `i64` millisecond range cannot be
    /// represented; it is logged at warn level and the Unix epoch is
    /// returned instead.
    pub fn now() -> Self {
        Self::from_clock(SystemTime::now())
    }

    fn from_clock(time: SystemTime) -> Self {
        match Self::from_system_time(time) {
            Ok(instant) => instant,
            Err(err) => {
                tracing::warn!(error = %err, "system clock out of range, using the Unix epoch");
                Self::default()
            }
        }
    }

    /// Create a date (time = 00:00:00.000)
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InstantError> {
        Self::from_ymd_hms_milli(year, month, day, 0, 0, 0, 0)
    }

    /// Create an instant from components
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, InstantError> {
        Self::from_ymd_hms_milli(year, month, day, hour, minute, second, 0)
    }

    /// Create an instant from components with milliseconds
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Result<Self, InstantError> {
        if !(1..=12).contains(&month) {
            return Err(InstantError::InvalidMonth(month));
        }
        let max_day = days_in_month(year, month);
        if day < 1 || day > max_day {
            return Err(InstantError::InvalidDay(day, month, year));
        }
        if hour > 23 {
            return Err(InstantError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(InstantError::InvalidMinute(minute));
        }
        if second > 59 {
            return Err(InstantError::InvalidSecond(second));
        }
        if milli > 999 {
            return Err(InstantError::InvalidMillisecond(milli));
        }

        let time_millis = (hour as i64) * MILLIS_PER_HOUR
            + (minute as i64) * MILLIS_PER_MINUTE
            + (second as i64) * MILLIS_PER_SECOND
            + (milli as i64);

        days_from_civil(year, month, day)
            .checked_mul(MILLIS_PER_DAY)
            .and_then(|day_millis| day_millis.checked_add(time_millis))
            .map(Self::from_unix_millis)
            .ok_or(InstantError::Overflow)
    }

    // ========== Accessors ==========

    /// Milliseconds since Unix epoch
    pub fn as_unix_millis(&self) -> i64 {
        self.millis
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.to_ymd().0
    }

    /// Month component (1-12)
    pub fn month(&self) -> u32 {
        self.to_ymd().1
    }

    /// Day component (1-31)
    pub fn day(&self) -> u32 {
        self.to_ymd().2
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u32 {
        (self.day_millis() / MILLIS_PER_HOUR) as u32
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u32 {
        ((self.day_millis() % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u32
    }

    /// Second component (0-59)
    pub fn second(&self) -> u32 {
        ((self.day_millis() % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32
    }

    /// Millisecond component (0-999)
    pub fn millisecond(&self) -> u32 {
        self.millis.rem_euclid(MILLIS_PER_SECOND) as u32
    }

    /// Decompose into year, month, day
    pub fn to_ymd(&self) -> (i32, u32, u32) {
        civil_from_days(self.millis.div_euclid(MILLIS_PER_DAY))
    }

    /// Decompose into all components
    pub fn to_components(&self) -> InstantComponents {
        let (year, month, day) = self.to_ymd();
        InstantComponents {
            year,
            month,
            day,
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
            millisecond: self.millisecond(),
        }
    }

    fn day_millis(&self) -> i64 {
        self.millis.rem_euclid(MILLIS_PER_DAY)
    }
}

impl fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.to_components();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            c.year, c.month, c.day, c.hour, c.minute, c.second, c.millisecond
        )
    }
}

impl TryFrom<SystemTime> for UtcInstant {
    type Error = InstantError;

    fn try_from(time: SystemTime) -> Result<Self, Self::Error> {
        Self::from_system_time(time)
    }
}

// ============================================================================
// InstantComponents
// ============================================================================

/// Decomposed UTC calendar and clock fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

// ============================================================================
// Calendar Utilities (Gregorian proleptic)
// ============================================================================

/// Check if year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a month, 0 for an out-of-range month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        m @ 1..=12 => DAYS_IN_MONTH[(m - 1) as usize],
        _ => 0,
    }
}

/// Convert civil date to days since Unix epoch
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400; // [0, 399]
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146097 + doe - UNIX_EPOCH_DAYS
}

/// Convert days since Unix epoch to civil date
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
    let doe = z - era * 146097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m as u32, d as u32)
}

// ============================================================================
// Tests
// ============================================================================
