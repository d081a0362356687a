//! Conversion between basic and extended representations
//!
//! The `_unchecked` functions are plain string surgery and accept
//! anything; malformed input gives malformed output. The checked
//! functions validate the input shape first, in strict mode: the ms
//! separator must be a literal `.`, so stripping `-`, `:`, `T` or `Z`
//! never swallows it.

use crate::extract::slice_field;
use crate::options::ValidationMode;
use crate::validate::IsoPattern;
use isoutc_core::IsoError;

/// Remove every `-` and `:`, leaving `T`, `Z` and the ms suffix intact
pub fn extended_to_basic_unchecked(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '-' | ':')).collect()
}

/// Convert an extended date, time or datetime to its basic form
pub fn extended_to_basic(s: &str) -> Result<String, IsoError> {
    match IsoPattern::detect_with(s, ValidationMode::Strict) {
        Some(pattern) if !pattern.format().is_basic() => Ok(extended_to_basic_unchecked(s)),
        _ => {
            tracing::debug!(input = s, "rejected extended-to-basic conversion");
            Err(IsoError::format_mismatch("an extended ISO 8601 date, time or datetime", s))
        }
    }
}

/// Re-insert separators into a basic datetime
///
/// `T` and `Z` are dropped, the first fourteen characters are sliced as
/// `YYYYMMDDHHMMSS`, and anything after them (such as `.123`) is kept
/// before the closing `Z`. Short input yields empty fields.
pub fn basic_to_extended_unchecked(s: &str) -> String {
    let compact: String = s.chars().filter(|c| !matches!(c, 'T' | 'Z')).collect();
    let rest: String = compact.chars().skip(14).collect();
    format!(
        "{}-{}-{}T{}:{}:{}{}Z",
        slice_field(&compact, 0, 4),
        slice_field(&compact, 4, 6),
        slice_field(&compact, 6, 8),
        slice_field(&compact, 8, 10),
        slice_field(&compact, 10, 12),
        slice_field(&compact, 12, 14),
        rest
    )
}

/// Convert a basic datetime (with or without ms) to the extended form
pub fn basic_to_extended(s: &str) -> Result<String, IsoError> {
    match IsoPattern::detect_with(s, ValidationMode::Strict) {
        Some(IsoPattern::DatetimeBasic) | Some(IsoPattern::DatetimeBasicMs) => {
            Ok(basic_to_extended_unchecked(s))
        }
        _ => {
            tracing::debug!(input = s, "rejected basic-to-extended conversion");
            Err(IsoError::format_mismatch("YYYYMMDDTHHMMSS[.mmm]Z", s))
        }
    }
}
