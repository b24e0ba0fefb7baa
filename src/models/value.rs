//! Typed values for a single recognized resolution.

use super::calendar::Calendar;
use super::interval::Interval;
use super::modifier::DurationModifier;
use super::shape::Shape;
use chrono::TimeDelta;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The decoded payload of a resolution, one variant per [`Shape`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase", bound = "")]
pub enum TemporalKind<C: Calendar> {
    /// A calendar date.
    Date {
        /// The recognized date.
        value: C::Date,
    },
    /// A wall-clock time.
    Time {
        /// The recognized time.
        value: C::Time,
    },
    /// A date with a time.
    DateTime {
        /// The recognized date-time.
        value: C::DateTime,
    },
    /// A span of seconds.
    Duration {
        /// Length of the span.
        #[serde(serialize_with = "serialize_seconds")]
        value: TimeDelta,
        /// Whether the span is exact, a lower or an upper bound.
        modifier: DurationModifier,
    },
    /// A range of dates.
    DateRange {
        /// The recognized interval.
        value: Interval<C::Date>,
    },
    /// A range of times.
    TimeRange {
        /// The recognized interval.
        value: Interval<C::Time>,
    },
    /// A range of date-times.
    DateTimeRange {
        /// The recognized interval.
        value: Interval<C::DateTime>,
    },
    /// A recurring set; only the Timex expression describes it.
    Set,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's serialize_with signature
fn serialize_seconds<S: serde::Serializer>(
    value: &TimeDelta,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(value.num_seconds())
}

impl<C: Calendar> TemporalKind<C> {
    /// The shape this payload belongs to.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Date { .. } => Shape::Date,
            Self::Time { .. } => Shape::Time,
            Self::DateTime { .. } => Shape::DateTime,
            Self::Duration { .. } => Shape::Duration,
            Self::DateRange { .. } => Shape::DateRange,
            Self::TimeRange { .. } => Shape::TimeRange,
            Self::DateTimeRange { .. } => Shape::DateTimeRange,
            Self::Set => Shape::Set,
        }
    }
}

impl<C: Calendar> fmt::Display for TemporalKind<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date { value } => write!(f, "{}", C::format_date(value)),
            Self::Time { value } => write!(f, "{}", C::format_time(value)),
            Self::DateTime { value } => write!(f, "{}", C::format_date_time(value)),
            Self::Duration { value, modifier } => {
                write!(f, "{}s", value.num_seconds())?;
                if *modifier != DurationModifier::None {
                    write!(f, " ({modifier})")?;
                }
                Ok(())
            },
            Self::DateRange { value } => value.fmt_with(f, C::format_date),
            Self::TimeRange { value } => value.fmt_with(f, C::format_time),
            Self::DateTimeRange { value } => value.fmt_with(f, C::format_date_time),
            Self::Set => write!(f, "set"),
        }
    }
}

/// One resolved value: the engine's Timex expression plus its typed payload.
///
/// Two values are equal when they have the same shape and the same Timex
/// expression; the payload is derived from the Timex by the engine and does not
/// take part in equality or hashing.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct TemporalValue<C: Calendar> {
    timex: String,
    #[serde(flatten)]
    kind: TemporalKind<C>,
}

impl<C: Calendar> TemporalValue<C> {
    /// Creates a value from a Timex expression and a payload.
    #[must_use]
    pub fn new(timex: impl Into<String>, kind: TemporalKind<C>) -> Self {
        Self {
            timex: timex.into(),
            kind,
        }
    }

    /// The Timex expression, stored verbatim.
    #[must_use]
    pub fn timex(&self) -> &str {
        &self.timex
    }

    /// The typed payload.
    #[must_use]
    pub const fn kind(&self) -> &TemporalKind<C> {
        &self.kind
    }

    /// The shape of the payload.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.kind.shape()
    }

    /// Returns the date if this is a [`Shape::Date`] value.
    #[must_use]
    pub const fn as_date(&self) -> Option<&C::Date> {
        match &self.kind {
            TemporalKind::Date { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the time if this is a [`Shape::Time`] value.
    #[must_use]
    pub const fn as_time(&self) -> Option<&C::Time> {
        match &self.kind {
            TemporalKind::Time { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the date-time if this is a [`Shape::DateTime`] value.
    #[must_use]
    pub const fn as_date_time(&self) -> Option<&C::DateTime> {
        match &self.kind {
            TemporalKind::DateTime { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the span and modifier if this is a [`Shape::Duration`] value.
    #[must_use]
    pub const fn as_duration(&self) -> Option<(TimeDelta, DurationModifier)> {
        match &self.kind {
            TemporalKind::Duration { value, modifier } => Some((*value, *modifier)),
            _ => None,
        }
    }

    /// Returns the interval if this is a [`Shape::DateRange`] value.
    #[must_use]
    pub const fn as_date_range(&self) -> Option<&Interval<C::Date>> {
        match &self.kind {
            TemporalKind::DateRange { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the interval if this is a [`Shape::TimeRange`] value.
    #[must_use]
    pub const fn as_time_range(&self) -> Option<&Interval<C::Time>> {
        match &self.kind {
            TemporalKind::TimeRange { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the interval if this is a [`Shape::DateTimeRange`] value.
    #[must_use]
    pub const fn as_date_time_range(&self) -> Option<&Interval<C::DateTime>> {
        match &self.kind {
            TemporalKind::DateTimeRange { value } => Some(value),
            _ => None,
        }
    }
}

impl<C: Calendar> PartialEq for TemporalValue<C> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.timex == other.timex
    }
}

impl<C: Calendar> Eq for TemporalValue<C> {}

impl<C: Calendar> Hash for TemporalValue<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        self.timex.hash(state);
    }
}

impl<C: Calendar> fmt::Display for TemporalValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timex: {} {}: {}", self.timex, self.shape(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::{BaselineCalendar, PreciseCalendar};
    use crate::models::modifier::RangeModifier;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn test_range_display_uses_literal_patterns() {
        let midnight = |d: NaiveDate| d.and_time(chrono::NaiveTime::MIN);
        let baseline: TemporalKind<BaselineCalendar> = TemporalKind::DateRange {
            value: Interval::with_modifier(
                RangeModifier::None,
                midnight(date(2018, 3, 14)),
                midnight(date(2021, 3, 14)),
            ),
        };
        assert_eq!(baseline.to_string(), "[2018-03-14, 2021-03-14]");

        let four_pm = chrono::NaiveTime::from_hms_opt(16, 0, 0).unwrap_or_default();
        let precise: TemporalKind<PreciseCalendar> = TemporalKind::TimeRange {
            value: Interval::open_end(RangeModifier::After, four_pm),
        };
        assert_eq!(precise.to_string(), "[16:00:00, 23:59:59] (after)");
    }

    #[test]
    fn test_shape_of_each_kind() {
        let set: TemporalKind<PreciseCalendar> = TemporalKind::Set;
        assert_eq!(set.shape(), Shape::Set);

        let range: TemporalKind<PreciseCalendar> = TemporalKind::DateRange {
            value: Interval::open_end(RangeModifier::Since, date(2018, 3, 14)),
        };
        assert_eq!(range.shape(), Shape::DateRange);

        let duration: TemporalKind<BaselineCalendar> = TemporalKind::Duration {
            value: TimeDelta::seconds(3600),
            modifier: DurationModifier::More,
        };
        assert_eq!(duration.shape(), Shape::Duration);
    }

    #[test]
    fn test_equality_uses_shape_and_timex() {
        let a: TemporalValue<PreciseCalendar> = TemporalValue::new(
            "2013-03-14",
            TemporalKind::Date {
                value: date(2013, 3, 14),
            },
        );
        let b = TemporalValue::new(
            "2013-03-14",
            TemporalKind::Date {
                value: date(2013, 3, 14),
            },
        );
        let other_timex = TemporalValue::new(
            "XXXX-03-14",
            TemporalKind::Date {
                value: date(2013, 3, 14),
            },
        );
        let set = TemporalValue::new("2013-03-14", TemporalKind::Set);

        assert_eq!(a, b);
        assert_ne!(a, other_timex);
        assert_ne!(a, set);

        let unique: HashSet<_> = [a, b, other_timex, set].into_iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_accessors() {
        let value: TemporalValue<PreciseCalendar> = TemporalValue::new(
            "PT1H",
            TemporalKind::Duration {
                value: TimeDelta::seconds(3600),
                modifier: DurationModifier::None,
            },
        );
        assert_eq!(
            value.as_duration(),
            Some((TimeDelta::seconds(3600), DurationModifier::None))
        );
        assert!(value.as_date().is_none());
        assert!(value.as_date_range().is_none());
        assert_eq!(value.timex(), "PT1H");
    }

    #[test]
    fn test_display() {
        let value: TemporalValue<BaselineCalendar> = TemporalValue::new(
            "P1D",
            TemporalKind::Duration {
                value: TimeDelta::seconds(86_400),
                modifier: DurationModifier::Less,
            },
        );
        assert_eq!(value.to_string(), "Timex: P1D duration: 86400s (less)");
    }

    #[test]
    fn test_serialize_flattens_kind() {
        let value: TemporalValue<PreciseCalendar> = TemporalValue::new(
            "2013-03-14",
            TemporalKind::Date {
                value: date(2013, 3, 14),
            },
        );
        let json = serde_json::to_value(&value).unwrap_or_default();
        assert_eq!(json["timex"], "2013-03-14");
        assert_eq!(json["shape"], "date");
        assert_eq!(json["value"], "2013-03-14");
    }
}
