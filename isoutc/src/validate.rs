//! Structural validators for ISO 8601 UTC strings
//!
//! Every pattern is anchored at both ends and matches ASCII digits only.
//! Nothing here checks that the numbers form a real calendar date:
//! `99999999` is a valid basic date as far as these predicates go.
//!
//! The millisecond patterns accept any single character other than a line
//! terminator (`\n`, `\r`, U+2028, U+2029) between the seconds and the
//! milliseconds in `ValidationMode::Loose` (the mode used by the free
//! predicates). `ValidationMode::Strict` requires a `.`.

use crate::options::{IsoFormat, ValidationMode};
use regex::Regex;
use std::sync::OnceLock;

const DATE_BASIC: &str = "[0-9]{8}";
const DATE_EXTENDED: &str = "[0-9]{4}-[0-9]{2}-[0-9]{2}";
const TIME_BASIC: &str = "[0-9]{6}";
const TIME_EXTENDED: &str = "[0-9]{2}:[0-9]{2}:[0-9]{2}";
const MS_LOOSE: &str = r"[^\n\r\x{2028}\x{2029}][0-9]{3}";
const MS_STRICT: &str = r"\.[0-9]{3}";

/// One of the ten recognised string shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsoPattern {
    DateBasic,
    DateExtended,
    TimeBasic,
    TimeBasicMs,
    TimeExtended,
    TimeExtendedMs,
    DatetimeBasic,
    DatetimeBasicMs,
    DatetimeExtended,
    DatetimeExtendedMs,
}

impl IsoPattern {
    pub const ALL: [IsoPattern; 10] = [
        IsoPattern::DateBasic,
        IsoPattern::DateExtended,
        IsoPattern::TimeBasic,
        IsoPattern::TimeBasicMs,
        IsoPattern::TimeExtended,
        IsoPattern::TimeExtendedMs,
        IsoPattern::DatetimeBasic,
        IsoPattern::DatetimeBasicMs,
        IsoPattern::DatetimeExtended,
        IsoPattern::DatetimeExtendedMs,
    ];

    pub const DATES: [IsoPattern; 2] = [IsoPattern::DateBasic, IsoPattern::DateExtended];

    pub const TIMES: [IsoPattern; 4] = [
        IsoPattern::TimeBasic,
        IsoPattern::TimeBasicMs,
        IsoPattern::TimeExtended,
        IsoPattern::TimeExtendedMs,
    ];

    pub const DATETIMES: [IsoPattern; 4] = [
        IsoPattern::DatetimeBasic,
        IsoPattern::DatetimeBasicMs,
        IsoPattern::DatetimeExtended,
        IsoPattern::DatetimeExtendedMs,
    ];

    /// Basic or extended
    pub fn format(self) -> IsoFormat {
        match self {
            IsoPattern::DateBasic
            | IsoPattern::TimeBasic
            | IsoPattern::TimeBasicMs
            | IsoPattern::DatetimeBasic
            | IsoPattern::DatetimeBasicMs => IsoFormat::Basic,
            _ => IsoFormat::Extended,
        }
    }

    /// Whether the pattern carries a millisecond suffix
    pub fn has_ms(self) -> bool {
        matches!(
            self,
            IsoPattern::TimeBasicMs
                | IsoPattern::TimeExtendedMs
                | IsoPattern::DatetimeBasicMs
                | IsoPattern::DatetimeExtendedMs
        )
    }

    /// Regular expression source for this pattern
    pub fn source(self, mode: ValidationMode) -> String {
        let ms = match mode {
            ValidationMode::Loose => MS_LOOSE,
            ValidationMode::Strict => MS_STRICT,
        };
        let body = match self {
            IsoPattern::DateBasic => DATE_BASIC.to_string(),
            IsoPattern::DateExtended => DATE_EXTENDED.to_string(),
            IsoPattern::TimeBasic => TIME_BASIC.to_string(),
            IsoPattern::TimeBasicMs => format!("{}{}", TIME_BASIC, ms),
            IsoPattern::TimeExtended => TIME_EXTENDED.to_string(),
            IsoPattern::TimeExtendedMs => format!("{}{}", TIME_EXTENDED, ms),
            IsoPattern::DatetimeBasic => format!("{}T{}Z", DATE_BASIC, TIME_BASIC),
            IsoPattern::DatetimeBasicMs => format!("{}T{}{}Z", DATE_BASIC, TIME_BASIC, ms),
            IsoPattern::DatetimeExtended => format!("{}T{}Z", DATE_EXTENDED, TIME_EXTENDED),
            IsoPattern::DatetimeExtendedMs => format!("{}T{}{}Z", DATE_EXTENDED, TIME_EXTENDED, ms),
        };
        format!("^{}$", body)
    }

    /// Full-string match in loose mode
    pub fn matches(self, s: &str) -> bool {
        self.matches_with(s, ValidationMode::Loose)
    }

    /// Whether `s` matches this pattern under `mode`
    pub fn matches_with(self, s: &str, mode: ValidationMode) -> bool {
        compiled(mode)[self as usize].is_match(s)
    }

    /// First pattern (in `ALL` order) that matches, loose mode
    pub fn detect(s: &str) -> Option<IsoPattern> {
        Self::detect_with(s, ValidationMode::Loose)
    }

    /// First pattern (in `ALL` order) that matches under `mode`
    pub fn detect_with(s: &str, mode: ValidationMode) -> Option<IsoPattern> {
        Self::ALL.into_iter().find(|p| p.matches_with(s, mode))
    }
}

// ============ Compiled regex patterns ============

fn compiled(mode: ValidationMode) -> &'static [Regex] {
    static LOOSE: OnceLock<Vec<Regex>> = OnceLock::new();
    static STRICT: OnceLock<Vec<Regex>> = OnceLock::new();
    let cell = match mode {
        ValidationMode::Loose => &LOOSE,
        ValidationMode::Strict => &STRICT,
    };
    cell.get_or_init(|| {
        IsoPattern::ALL
            .iter()
            .map(|p| Regex::new(&p.source(mode)).unwrap())
            .collect()
    })
}

fn any_matches(patterns: &[IsoPattern], s: &str, mode: ValidationMode) -> bool {
    patterns.iter().any(|p| p.matches_with(s, mode))
}

// ============ Date ============

/// Basic or extended date
pub fn is_iso_date_utc(s: &str) -> bool {
    any_matches(&IsoPattern::DATES, s, ValidationMode::Loose)
}

/// `YYYYMMDD`
pub fn is_iso_date_utc_basic(s: &str) -> bool {
    IsoPattern::DateBasic.matches(s)
}

/// `YYYY-MM-DD`
pub fn is_iso_date_utc_extended(s: &str) -> bool {
    IsoPattern::DateExtended.matches(s)
}

// ============ Time ============

/// Any of the four time shapes
pub fn is_iso_time_utc(s: &str) -> bool {
    any_matches(&IsoPattern::TIMES, s, ValidationMode::Loose)
}

/// Any of the four time shapes, with the given ms separator rule
pub fn is_iso_time_utc_with(s: &str, mode: ValidationMode) -> bool {
    any_matches(&IsoPattern::TIMES, s, mode)
}

/// `HHMMSS`
pub fn is_iso_time_utc_basic(s: &str) -> bool {
    IsoPattern::TimeBasic.matches(s)
}

/// `HHMMSS.mmm`
pub fn is_iso_time_utc_basic_ms(s: &str) -> bool {
    IsoPattern::TimeBasicMs.matches(s)
}

/// `HH:MM:SS`
pub fn is_iso_time_utc_extended(s: &str) -> bool {
    IsoPattern::TimeExtended.matches(s)
}

/// `HH:MM:SS.mmm`
pub fn is_iso_time_utc_extended_ms(s: &str) -> bool {
    IsoPattern::TimeExtendedMs.matches(s)
}

// ============ Datetime ============

/// Any of the four datetime shapes
pub fn is_iso_datetime_utc(s: &str) -> bool {
    any_matches(&IsoPattern::DATETIMES, s, ValidationMode::Loose)
}

/// Any of the four datetime shapes, with the given ms separator rule
pub fn is_iso_datetime_utc_with(s: &str, mode: ValidationMode) -> bool {
    any_matches(&IsoPattern::DATETIMES, s, mode)
}

/// `YYYYMMDDTHHMMSSZ`
pub fn is_iso_datetime_utc_basic(s: &str) -> bool {
    IsoPattern::DatetimeBasic.matches(s)
}

/// `YYYYMMDDTHHMMSS.mmmZ`
pub fn is_iso_datetime_utc_basic_ms(s: &str) -> bool {
    IsoPattern::DatetimeBasicMs.matches(s)
}

/// `YYYY-MM-DDTHH:MM:SSZ`
pub fn is_iso_datetime_utc_extended(s: &str) -> bool {
    IsoPattern::DatetimeExtended.matches(s)
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn is_iso_datetime_utc_extended_ms(s: &str) -> bool {
    IsoPattern::DatetimeExtendedMs.matches(s)
}
