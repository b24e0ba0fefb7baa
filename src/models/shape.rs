//! Recognized temporal shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace prefix the engine puts in front of every datetime type label.
pub const TYPE_LABEL_PREFIX: &str = "datetimeV2.";

/// The eight temporal shapes a recognizer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A calendar date.
    Date,
    /// A wall-clock time.
    Time,
    /// A range of calendar dates.
    DateRange,
    /// A range of wall-clock times.
    TimeRange,
    /// A range of date-times.
    DateTimeRange,
    /// A calendar date with a wall-clock time.
    DateTime,
    /// A span of seconds.
    Duration,
    /// A recurring set, only described by its Timex expression.
    Set,
}

impl Shape {
    /// Returns all shape variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Date,
            Self::Time,
            Self::DateRange,
            Self::TimeRange,
            Self::DateTimeRange,
            Self::DateTime,
            Self::Duration,
            Self::Set,
        ]
    }

    /// Returns the shape key as the engine spells it after the namespace prefix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::DateRange => "daterange",
            Self::TimeRange => "timerange",
            Self::DateTimeRange => "datetimerange",
            Self::DateTime => "datetime",
            Self::Duration => "duration",
            Self::Set => "set",
        }
    }

    /// Returns true for the three interval shapes.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::DateRange | Self::TimeRange | Self::DateTimeRange)
    }

    /// Parses a shape key case-insensitively (`DateRange`, `daterange`, ...).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s))
    }

    /// Derives the shape from an engine type label such as `datetimeV2.daterange`.
    ///
    /// Only the portion after the fixed `datetimeV2.` namespace is significant.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnrecognizedShape`] if the label is shorter than the
    /// namespace or its key names no known shape.
    pub fn from_type_label(label: &str) -> crate::Result<Self> {
        label
            .get(TYPE_LABEL_PREFIX.len()..)
            .and_then(Self::parse)
            .ok_or_else(|| crate::Error::UnrecognizedShape(label.to_string()))
    }

    /// Returns the full engine type label for this shape.
    #[must_use]
    pub fn type_label(&self) -> String {
        format!("{TYPE_LABEL_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Shape {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::Error::UnrecognizedShape(s.to_string()))
    }
}
