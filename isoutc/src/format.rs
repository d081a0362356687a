//! Date, time and datetime string formatters
//!
//! Output depends only on the UTC fields of the instant. The `new_*`
//! variants read the system clock once and format that instant.

use crate::options::{FormatOptions, IsoFormat};
use isoutc_core::UtcInstant;

/// Format the calendar date: `19940426` or `1994-04-26`
pub fn iso_date_utc(instant: &UtcInstant, format: IsoFormat) -> String {
    let (year, month, day) = instant.to_ymd();
    match format {
        IsoFormat::Basic => format!("{:04}{:02}{:02}", year, month, day),
        IsoFormat::Extended => format!("{:04}-{:02}-{:02}", year, month, day),
    }
}

/// Format the clock time: `133700`, `13:37:00`, `133700.123` or `13:37:00.123`
pub fn iso_time_utc(instant: &UtcInstant, opts: FormatOptions) -> String {
    let (hour, minute, second) = (instant.hour(), instant.minute(), instant.second());
    let mut time = match opts.format {
        IsoFormat::Basic => format!("{:02}{:02}{:02}", hour, minute, second),
        IsoFormat::Extended => format!("{:02}:{:02}:{:02}", hour, minute, second),
    };
    if opts.ms {
        time.push_str(&format!(".{:03}", instant.millisecond()));
    }
    time
}

/// Format a full datetime: date, `T`, time, `Z`
pub fn iso_datetime_utc(instant: &UtcInstant, opts: FormatOptions) -> String {
    format!(
        "{}T{}Z",
        iso_date_utc(instant, opts.format),
        iso_time_utc(instant, opts)
    )
}

/// Format today's date
pub fn new_iso_date_utc(format: IsoFormat) -> String {
    iso_date_utc(&UtcInstant::now(), format)
}

/// Format the current time
pub fn new_iso_time_utc(opts: FormatOptions) -> String {
    iso_time_utc(&UtcInstant::now(), opts)
}

/// Format the current datetime
pub fn new_iso_datetime_utc(opts: FormatOptions) -> String {
    iso_datetime_utc(&UtcInstant::now(), opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UtcInstant {
        UtcInstant::from_ymd_hms_milli(1994, 4, 26, 13, 37, 0, 123).unwrap()
    }

    #[test]
    fn test_date() {
        assert_eq!(iso_date_utc(&sample(), IsoFormat::Basic), "19940426");
        assert_eq!(iso_date_utc(&sample(), IsoFormat::Extended), "1994-04-26");
    }

    #[test]
    fn test_date_month_is_one_based() {
        let jan = UtcInstant::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(iso_date_utc(&jan, IsoFormat::Extended), "2024-01-05");
        assert_eq!(iso_date_utc(&jan, IsoFormat::Basic), "20240105");
    }

    #[test]
    fn test_date_pads_small_years() {
        let early = UtcInstant::from_ymd(42, 3, 9).unwrap();
        assert_eq!(iso_date_utc(&early, IsoFormat::Basic), "00420309");
    }

    #[test]
    fn test_time() {
        let i = sample();
        assert_eq!(iso_time_utc(&i, FormatOptions::basic().with_ms(false)), "133700");
        assert_eq!(iso_time_utc(&i, FormatOptions::extended().with_ms(false)), "13:37:00");
        assert_eq!(iso_time_utc(&i, FormatOptions::basic()), "133700.123");
        assert_eq!(iso_time_utc(&i, FormatOptions::extended()), "13:37:00.123");
    }

    #[test]
    fn test_time_pads_milliseconds() {
        let i = UtcInstant::from_ymd_hms_milli(2000, 1, 1, 1, 2, 3, 7).unwrap();
        assert_eq!(iso_time_utc(&i, FormatOptions::extended()), "01:02:03.007");
    }

    #[test]
    fn test_datetime() {
        let i = sample();
        assert_eq!(iso_datetime_utc(&i, FormatOptions::basic().with_ms(false)), "19940426T133700Z");
        assert_eq!(iso_datetime_utc(&i, FormatOptions::basic()), "19940426T133700.123Z");
        assert_eq!(iso_datetime_utc(&i, FormatOptions::extended().with_ms(false)), "1994-04-26T13:37:00Z");
        assert_eq!(iso_datetime_utc(&i, FormatOptions::default()), "1994-04-26T13:37:00.123Z");
    }

    #[test]
    fn test_datetime_matches_display() {
        let i = sample();
        assert_eq!(iso_datetime_utc(&i, FormatOptions::default()), i.to_string());
    }

    #[test]
    fn test_now_variants_have_expected_shape() {
        assert_eq!(new_iso_date_utc(IsoFormat::Basic).len(), 8);
        assert_eq!(new_iso_time_utc(FormatOptions::extended()).len(), 12);
        assert_eq!(new_iso_datetime_utc(FormatOptions::basic().with_ms(false)).len(), 16);
    }
}
