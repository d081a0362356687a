//! Parse ISO 8601 UTC datetime strings back into instants
//!
//! Only the four datetime shapes this crate produces are accepted.
//! Unlike the predicates, parsing is calendar aware and rejects values
//! such as `2024-02-30` or hour `25`.

use crate::extract::{compact_datetime, iso_fields};
use crate::options::ValidationMode;
use crate::validate::IsoPattern;
use isoutc_core::{IsoError, UtcInstant};

/// Parse `YYYYMMDDTHHMMSS[.mmm]Z` or `YYYY-MM-DDTHH:MM:SS[.mmm]Z`
///
/// The millisecond separator must be a `.`.
pub fn parse_iso_datetime_utc(s: &str) -> Result<UtcInstant, IsoError> {
    let pattern = match IsoPattern::detect_with(s, ValidationMode::Strict) {
        Some(p) if IsoPattern::DATETIMES.contains(&p) => p,
        _ => {
            tracing::debug!(input = s, "rejected datetime parse");
            return Err(IsoError::parse_error(format!("not an ISO 8601 UTC datetime: {:?}", s))
                .with_input(s));
        }
    };

    let fields = iso_fields(s);
    let milli = if pattern.has_ms() {
        // compact form is YYYYMMDDHHMMSS.mmm
        number(&compact_datetime(s)[15..], s)?
    } else {
        0
    };

    let instant = UtcInstant::from_ymd_hms_milli(
        number(&fields.year, s)? as i32,
        number(&fields.month, s)?,
        number(&fields.day, s)?,
        number(&fields.hour, s)?,
        number(&fields.minute, s)?,
        number(&fields.second, s)?,
        milli,
    )
    .map_err(|e| IsoError::from(e).with_input(s))?;

    Ok(instant)
}

fn number(digits: &str, input: &str) -> Result<u32, IsoError> {
    digits
        .parse()
        .map_err(|_| IsoError::parse_error(format!("invalid number {:?}", digits)).with_input(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use isoutc_core::codes;

    #[test]
    fn test_parse_all_shapes() {
        let expected = UtcInstant::from_ymd_hms_milli(1994, 4, 26, 13, 37, 0, 123).unwrap();
        let whole = UtcInstant::from_ymd_hms(1994, 4, 26, 13, 37, 0).unwrap();

        assert_eq!(parse_iso_datetime_utc("1994-04-26T13:37:00.123Z").unwrap(), expected);
        assert_eq!(parse_iso_datetime_utc("19940426T133700.123Z").unwrap(), expected);
        assert_eq!(parse_iso_datetime_utc("1994-04-26T13:37:00Z").unwrap(), whole);
        assert_eq!(parse_iso_datetime_utc("19940426T133700Z").unwrap(), whole);
    }

    #[test]
    fn test_parse_rejects_non_datetimes() {
        for s in ["", "1994-04-26", "13:37:00", "not-a-date", "1994-04-26T13:37:00"] {
            let err = parse_iso_datetime_utc(s).unwrap_err();
            assert_eq!(err.code, codes::PARSE_ERROR, "input {:?}", s);
        }
    }

    #[test]
    fn test_parse_requires_dot_separator() {
        assert!(parse_iso_datetime_utc("19940426T133700,123Z").is_err());
    }

    #[test]
    fn test_parse_is_calendar_aware() {
        let err = parse_iso_datetime_utc("2023-02-29T00:00:00Z").unwrap_err();
        assert_eq!(err.code, codes::INVALID_DATE);
        assert_eq!(err.input.as_deref(), Some("2023-02-29T00:00:00Z"));

        let err = parse_iso_datetime_utc("20240101T250000Z").unwrap_err();
        assert_eq!(err.code, codes::INVALID_TIME);

        assert!(parse_iso_datetime_utc("2024-02-29T00:00:00Z").is_ok());
    }
}
