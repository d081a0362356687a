//! Formatting and validation options

use serde::{Deserialize, Serialize};

/// ISO 8601 representation: separators or not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsoFormat {
    /// No separators: `19940426T133700Z`
    Basic,
    /// `-` and `:` separators: `1994-04-26T13:37:00Z`
    #[default]
    Extended,
}

impl IsoFormat {
    pub fn is_basic(self) -> bool {
        self == IsoFormat::Basic
    }
}

/// Options for the time and datetime formatters
///
/// Defaults to the extended format with milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatOptions {
    pub format: IsoFormat,
    pub ms: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: IsoFormat::Extended,
            ms: true,
        }
    }
}

impl FormatOptions {
    pub fn new(format: IsoFormat, ms: bool) -> Self {
        Self { format, ms }
    }

    /// Basic format, milliseconds included
    pub fn basic() -> Self {
        Self::new(IsoFormat::Basic, true)
    }

    /// Extended format, milliseconds included
    pub fn extended() -> Self {
        Self::new(IsoFormat::Extended, true)
    }

    pub fn with_ms(mut self, ms: bool) -> Self {
        self.ms = ms;
        self
    }

    pub fn with_format(mut self, format: IsoFormat) -> Self {
        self.format = format;
        self
    }
}

/// How strictly the millisecond separator is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Any single character may separate seconds from milliseconds
    #[default]
    Loose,
    /// Only a literal `.` separates seconds from milliseconds
    Strict,
}
