//! isoutc - ISO 8601 UTC strings
//!
//! Formatting, structural validation, basic/extended conversion and
//! field extraction for UTC date, time and datetime strings.
//!
//! Two surfaces share one implementation:
//! - the crate root: the full date/time/datetime × basic/extended × ms
//!   matrix, anchored predicates and the `IsoUtc` snapshot
//! - [`simple`]: datetime-only basic/extended helpers with unanchored
//!   predicates

mod options;
mod format;
mod snapshot;
mod validate;
mod convert;
mod extract;
mod parse;
pub mod simple;

pub use isoutc_core::{codes, InstantComponents, InstantError, IsoError, UtcInstant};

pub use options::{FormatOptions, IsoFormat, ValidationMode};
pub use format::{
    iso_date_utc, iso_time_utc, iso_datetime_utc,
    new_iso_date_utc, new_iso_time_utc, new_iso_datetime_utc,
};
pub use snapshot::{IsoUtc, new_iso_utc};
pub use validate::{
    IsoPattern,
    is_iso_date_utc, is_iso_date_utc_basic, is_iso_date_utc_extended,
    is_iso_time_utc, is_iso_time_utc_with,
    is_iso_time_utc_basic, is_iso_time_utc_basic_ms,
    is_iso_time_utc_extended, is_iso_time_utc_extended_ms,
    is_iso_datetime_utc, is_iso_datetime_utc_with,
    is_iso_datetime_utc_basic, is_iso_datetime_utc_basic_ms,
    is_iso_datetime_utc_extended, is_iso_datetime_utc_extended_ms,
};
pub use convert::{
    extended_to_basic, extended_to_basic_unchecked,
    basic_to_extended, basic_to_extended_unchecked,
};
pub use extract::{
    IsoFields, iso_fields, compact_datetime,
    iso_year, iso_month, iso_day, iso_hour, iso_minute, iso_second,
};
pub use parse::parse_iso_datetime_utc;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        UtcInstant, IsoUtc, IsoError, IsoFormat, FormatOptions, ValidationMode, IsoPattern,
    };
    pub use isoutc_core::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod surface_tests {
        use super::*;

        #[test]
        fn test_root_and_simple_agree() {
            let i = UtcInstant::from_ymd_hms_milli(2031, 7, 4, 5, 6, 7, 890).unwrap();
            assert_eq!(
                simple::iso_datetime_basic(&i),
                iso_datetime_utc(&i, FormatOptions::basic().with_ms(false))
            );
            assert_eq!(
                simple::iso_datetime_extended(&i),
                IsoUtc::from_instant(&i).datetime_extended
            );
        }

        #[test]
        fn test_prelude_imports() {
            use crate::prelude::*;
            let iso = IsoUtc::from_instant(&UtcInstant::default());
            assert_eq!(iso.date_extended, "1970-01-01");
            assert_eq!(IsoPattern::detect(&iso.time_basic_ms), Some(IsoPattern::TimeBasicMs));
            assert_eq!(IsoError::overflow().code, codes::OVERFLOW);
        }
    }

    mod parse_round_trip_tests {
        use super::*;

        #[test]
        fn test_snapshot_strings_parse_back() {
            let i = UtcInstant::from_unix_millis(1_700_000_000_042);
            let iso = IsoUtc::from_instant(&i);
            assert_eq!(parse_iso_datetime_utc(&iso.datetime_basic_ms).unwrap(), i);
            assert_eq!(parse_iso_datetime_utc(&iso.datetime_extended_ms).unwrap(), i);
            assert_eq!(
                parse_iso_datetime_utc(&iso.datetime_extended).unwrap().as_unix_millis(),
                1_700_000_000_000
            );
        }
    }
}
