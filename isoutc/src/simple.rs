//! Reduced datetime-only surface
//!
//! Distinguishes only basic and extended datetimes, always without
//! milliseconds when formatting. The two predicates here are unanchored:
//! they look for a datetime anywhere in the input, so they accept
//! everything the strict `is_iso_datetime_utc_*` family accepts and more.

use crate::convert;
use crate::format::iso_datetime_utc;
use crate::options::{FormatOptions, ValidationMode};
use crate::validate::IsoPattern;
use isoutc_core::{IsoError, UtcInstant};
use regex::Regex;
use std::sync::OnceLock;

pub use crate::extract::{iso_day, iso_hour, iso_minute, iso_month, iso_second, iso_year};

// ============ Compiled regex patterns ============

fn get_basic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{8}T[0-9]{6}").unwrap())
}

fn get_extended_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}").unwrap())
}

// ============ Formatting ============

/// `YYYYMMDDTHHMMSSZ`
pub fn iso_datetime_basic(instant: &UtcInstant) -> String {
    iso_datetime_utc(instant, FormatOptions::basic().with_ms(false))
}

/// `YYYY-MM-DDTHH:MM:SSZ`
pub fn iso_datetime_extended(instant: &UtcInstant) -> String {
    iso_datetime_utc(instant, FormatOptions::extended().with_ms(false))
}

/// Current time as `YYYYMMDDTHHMMSSZ`
pub fn new_iso_datetime_basic() -> String {
    iso_datetime_basic(&UtcInstant::now())
}

/// Current time as `YYYY-MM-DDTHH:MM:SSZ`
pub fn new_iso_datetime_extended() -> String {
    iso_datetime_extended(&UtcInstant::now())
}

// ============ Validation ============

/// Contains a basic datetime somewhere in the input
pub fn is_iso_datetime_basic(s: &str) -> bool {
    get_basic_regex().is_match(s)
}

/// Contains an extended datetime somewhere in the input
pub fn is_iso_datetime_extended(s: &str) -> bool {
    get_extended_regex().is_match(s)
}

// ============ Conversion ============

/// Extended datetime to basic; the input must be a complete extended datetime
/// with `.` before any milliseconds
pub fn iso_datetime_extended_to_basic(s: &str) -> Result<String, IsoError> {
    let strict = ValidationMode::Strict;
    if IsoPattern::DatetimeExtended.matches_with(s, strict)
        || IsoPattern::DatetimeExtendedMs.matches_with(s, strict)
    {
        Ok(convert::extended_to_basic_unchecked(s))
    } else {
        Err(IsoError::format_mismatch("YYYY-MM-DDTHH:MM:SS[.mmm]Z", s))
    }
}

/// Strip `-` and `:` without validating the input
pub fn iso_datetime_extended_to_basic_unchecked(s: &str) -> String {
    convert::extended_to_basic_unchecked(s)
}

/// Basic datetime to extended; the input must be a complete basic datetime
pub fn iso_datetime_basic_to_extended(s: &str) -> Result<String, IsoError> {
    convert::basic_to_extended(s)
}

/// Re-insert separators by fixed offsets without validating the input
pub fn iso_datetime_basic_to_extended_unchecked(s: &str) -> String {
    convert::basic_to_extended_unchecked(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{is_iso_datetime_utc_basic, is_iso_datetime_utc_extended};

    fn sample() -> UtcInstant {
        UtcInstant::from_ymd_hms_milli(1994, 4, 26, 13, 37, 0, 123).unwrap()
    }

    #[test]
    fn test_formatting_drops_ms() {
        assert_eq!(iso_datetime_basic(&sample()), "19940426T133700Z");
        assert_eq!(iso_datetime_extended(&sample()), "1994-04-26T13:37:00Z");
    }

    #[test]
    fn test_now_formatting_validates() {
        assert!(is_iso_datetime_utc_basic(&new_iso_datetime_basic()));
        assert!(is_iso_datetime_utc_extended(&new_iso_datetime_extended()));
    }

    #[test]
    fn test_coarse_predicates() {
        assert!(is_iso_datetime_basic("19940426T133700Z"));
        assert!(is_iso_datetime_basic("19940426T133700.123Z"));
        assert!(is_iso_datetime_extended("1994-04-26T13:37:00Z"));
        assert!(is_iso_datetime_extended("1994-04-26T13:37:00.123Z"));
        assert!(!is_iso_datetime_basic("1994-04-26T13:37:00Z"));
        assert!(!is_iso_datetime_extended("19940426T133700Z"));
        assert!(!is_iso_datetime_basic(""));
    }

    #[test]
    fn test_coarse_predicates_are_unanchored() {
        assert!(is_iso_datetime_basic("created=19940426T133700"));
        assert!(!is_iso_datetime_utc_basic("created=19940426T133700"));
        assert!(is_iso_datetime_extended("[1994-04-26T13:37:00] boot"));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            iso_datetime_extended_to_basic("1994-04-26T13:37:00Z").unwrap(),
            "19940426T133700Z"
        );
        assert!(iso_datetime_extended_to_basic("1994-04-26").is_err());
        assert_eq!(
            iso_datetime_basic_to_extended("19940426T133700Z").unwrap(),
            "1994-04-26T13:37:00Z"
        );
        assert_eq!(iso_datetime_extended_to_basic_unchecked("1994-04"), "199404");
        assert_eq!(iso_datetime_basic_to_extended_unchecked("19940426133700"), "1994-04-26T13:37:00Z");
    }

    #[test]
    fn test_extended_to_basic_requires_dot_separator() {
        for s in ["1994-04-26T13:37:00-123Z", "1994-04-26T13:37:00:123Z", "1994-04-26T13:37:00T123Z"] {
            let err = iso_datetime_extended_to_basic(s).unwrap_err();
            assert_eq!(err.code, isoutc_core::codes::FORMAT_MISMATCH, "input {:?}", s);
        }
        assert_eq!(
            iso_datetime_extended_to_basic("1994-04-26T13:37:00.123Z").unwrap(),
            "19940426T133700.123Z"
        );
    }

    #[test]
    fn test_extractors_reexported() {
        assert_eq!(iso_year("1994-04-26T13:37:00Z"), "1994");
        assert_eq!(iso_minute("19940426T133700Z"), "37");
    }
}
