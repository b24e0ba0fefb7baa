//! Calendar representations that resolved values are expressed in.
//!
//! A [`Calendar`] names the point types used for dates, times and date-times,
//! and owns the fixed, locale-invariant literal patterns used to parse them:
//!
//! | Shape | Pattern |
//! |-------|---------|
//! | Date | `yyyy-MM-dd` |
//! | Time | `HH:mm:ss` |
//! | DateTime | `yyyy-MM-dd HH:mm:ss` |
//!
//! Two representations ship with the crate:
//!
//! - [`BaselineCalendar`] stores every point as a [`NaiveDateTime`]. Dates sit at
//!   midnight and times are anchored on `1970-01-01`; callers ignore the unused half.
//! - [`PreciseCalendar`] uses a dedicated type per point kind ([`NaiveDate`],
//!   [`NaiveTime`], [`NaiveDateTime`]) and nanosecond-precision sentinels.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// A fixed literal pattern: the pattern as documented and its `chrono` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralPattern {
    /// Documented pattern, e.g. `yyyy-MM-dd`.
    pub display: &'static str,
    /// Equivalent `chrono` format string.
    pub format: &'static str,
}

/// Pattern for date literals.
pub const DATE_PATTERN: LiteralPattern = LiteralPattern {
    display: "yyyy-MM-dd",
    format: "%Y-%m-%d",
};

/// Pattern for time literals.
pub const TIME_PATTERN: LiteralPattern = LiteralPattern {
    display: "HH:mm:ss",
    format: "%H:%M:%S",
};

/// Pattern for date-time literals.
pub const DATE_TIME_PATTERN: LiteralPattern = LiteralPattern {
    display: "yyyy-MM-dd HH:mm:ss",
    format: "%Y-%m-%d %H:%M:%S",
};

/// Parse failure for a literal that does not follow its fixed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralError {
    /// The pattern the literal was expected to follow.
    pub pattern: LiteralPattern,
}

/// A point-in-time type usable as an interval bound.
pub trait Point: Copy + Ord + Hash + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Smallest representable value, used for open starts.
    fn min_value() -> Self;
    /// Largest representable value, used for open ends.
    fn max_value() -> Self;
}

impl Point for NaiveDate {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl Point for NaiveTime {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        // One nanosecond before midnight.
        Self::MIN
            .overflowing_sub_signed(TimeDelta::nanoseconds(1))
            .0
    }
}

impl Point for NaiveDateTime {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

/// A calendar representation: point types plus their literal parsers.
///
/// Implementations are stateless marker types.
pub trait Calendar:
    fmt::Debug + Clone + Copy + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Representation of a calendar date.
    type Date: Point;
    /// Representation of a wall-clock time.
    type Time: Point;
    /// Representation of a date with a time.
    type DateTime: Point;

    /// Short name of the representation.
    const NAME: &'static str;

    /// Parses a `yyyy-MM-dd` literal.
    fn parse_date(text: &str) -> Result<Self::Date, LiteralError>;
    /// Parses a `HH:mm:ss` literal.
    fn parse_time(text: &str) -> Result<Self::Time, LiteralError>;
    /// Parses a `yyyy-MM-dd HH:mm:ss` literal.
    fn parse_date_time(text: &str) -> Result<Self::DateTime, LiteralError>;

    /// Formats a date with the `yyyy-MM-dd` pattern.
    fn format_date(date: &Self::Date) -> String;
    /// Formats a time with the `HH:mm:ss` pattern.
    fn format_time(time: &Self::Time) -> String;
    /// Formats a date-time with the `yyyy-MM-dd HH:mm:ss` pattern.
    fn format_date_time(date_time: &Self::DateTime) -> String;
}

/// Every point is a [`NaiveDateTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BaselineCalendar;

/// Dedicated date, time and date-time types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PreciseCalendar;

impl LiteralPattern {
    /// Whether `text` has the pattern's layout: an ASCII digit at every letter
    /// position and the same separator everywhere else.
    #[must_use]
    pub fn matches_layout(&self, text: &str) -> bool {
        text.len() == self.display.len()
            && text
                .bytes()
                .zip(self.display.bytes())
                .all(|(c, p)| if p.is_ascii_alphabetic() { c.is_ascii_digit() } else { c == p })
    }
}

/// Checks the literal's layout against the pattern, then defers to chrono for
/// calendar validity.
///
/// `chrono` alone accepts single-digit fields, blank padding and signed years.
fn parse_exact<T>(
    text: &str,
    pattern: LiteralPattern,
    parse: impl FnOnce(&str, &str) -> chrono::ParseResult<T>,
) -> Result<T, LiteralError> {
    if !pattern.matches_layout(text) {
        return Err(LiteralError { pattern });
    }
    parse(text, pattern.format).map_err(|_| LiteralError { pattern })
}

impl Calendar for BaselineCalendar {
    type Date = NaiveDateTime;
    type Time = NaiveDateTime;
    type DateTime = NaiveDateTime;

    const NAME: &'static str = "baseline";

    fn parse_date(text: &str) -> Result<Self::Date, LiteralError> {
        parse_exact(text, DATE_PATTERN, NaiveDate::parse_from_str)
            .map(|date| date.and_time(NaiveTime::MIN))
    }

    fn parse_time(text: &str) -> Result<Self::Time, LiteralError> {
        parse_exact(text, TIME_PATTERN, NaiveTime::parse_from_str)
            .map(|time| NaiveDate::default().and_time(time))
    }

    fn parse_date_time(text: &str) -> Result<Self::DateTime, LiteralError> {
        parse_exact(text, DATE_TIME_PATTERN, NaiveDateTime::parse_from_str)
    }

    fn format_date(date: &Self::Date) -> String {
        date.format(DATE_PATTERN.format).to_string()
    }

    fn format_time(time: &Self::Time) -> String {
        time.format(TIME_PATTERN.format).to_string()
    }

    fn format_date_time(date_time: &Self::DateTime) -> String {
        date_time.format(DATE_TIME_PATTERN.format).to_string()
    }
}

impl Calendar for PreciseCalendar {
    type Date = NaiveDate;
    type Time = NaiveTime;
    type DateTime = NaiveDateTime;

    const NAME: &'static str = "precise";

    fn parse_date(text: &str) -> Result<Self::Date, LiteralError> {
        parse_exact(text, DATE_PATTERN, NaiveDate::parse_from_str)
    }

    fn parse_time(text: &str) -> Result<Self::Time, LiteralError> {
        parse_exact(text, TIME_PATTERN, NaiveTime::parse_from_str)
    }

    fn parse_date_time(text: &str) -> Result<Self::DateTime, LiteralError> {
        parse_exact(text, DATE_TIME_PATTERN, NaiveDateTime::parse_from_str)
    }

    fn format_date(date: &Self::Date) -> String {
        date.format(DATE_PATTERN.format).to_string()
    }

    fn format_time(time: &Self::Time) -> String {
        time.format(TIME_PATTERN.format).to_string()
    }

    fn format_date_time(date_time: &Self::DateTime) -> String {
        date_time.format(DATE_TIME_PATTERN.format).to_string()
    }
}
