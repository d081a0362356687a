//! Field extraction from datetime strings
//!
//! Input is normalised to compact digits (`-`, `:`, `T` and `Z` removed)
//! and fields are read at fixed offsets. Nothing is validated: short or
//! malformed input gives truncated or empty fields.

use serde::{Deserialize, Serialize};

const YEAR: (usize, usize) = (0, 4);
const MONTH: (usize, usize) = (4, 6);
const DAY: (usize, usize) = (6, 8);
const HOUR: (usize, usize) = (8, 10);
const MINUTE: (usize, usize) = (10, 12);
const SECOND: (usize, usize) = (12, 14);

/// Characters `[start, end)` of `s`, clipped to its length
pub(crate) fn slice_field(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Strip every separator and designator, leaving digits and the ms suffix
pub fn compact_datetime(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '-' | ':' | 'T' | 'Z')).collect()
}

fn field(s: &str, (start, end): (usize, usize)) -> String {
    slice_field(&compact_datetime(s), start, end)
}

/// Four-digit year, characters 0..4 of the compact form
pub fn iso_year(s: &str) -> String {
    field(s, YEAR)
}

/// Two-digit month, characters 4..6 of the compact form
pub fn iso_month(s: &str) -> String {
    field(s, MONTH)
}

/// Two-digit day, characters 6..8 of the compact form
pub fn iso_day(s: &str) -> String {
    field(s, DAY)
}

/// Two-digit hour, characters 8..10 of the compact form
pub fn iso_hour(s: &str) -> String {
    field(s, HOUR)
}

/// Two-digit minute, characters 10..12 of the compact form
pub fn iso_minute(s: &str) -> String {
    field(s, MINUTE)
}

/// Two-digit second, characters 12..14 of the compact form
pub fn iso_second(s: &str) -> String {
    field(s, SECOND)
}

/// All six fields of a datetime string, as strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoFields {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
}

/// Extract every field in one pass over the normalised string
pub fn iso_fields(s: &str) -> IsoFields {
    let compact = compact_datetime(s);
    let at = |(start, end): (usize, usize)| slice_field(&compact, start, end);
    IsoFields {
        year: at(YEAR),
        month: at(MONTH),
        day: at(DAY),
        hour: at(HOUR),
        minute: at(MINUTE),
        second: at(SECOND),
    }
}
