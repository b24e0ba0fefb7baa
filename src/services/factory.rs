//! Object factories: field dictionaries in, typed values out.
//!
//! An [`ObjectFactory`] turns one engine dictionary into a [`TemporalValue`] for a
//! given [`Shape`]. The dispatch and the per-shape parsing rules live in the
//! trait's provided methods; implementations only choose the [`Calendar`] the
//! values are expressed in, and may override individual shape hooks.
//!
//! # Architecture
//!
//! ```text
//! ObjectFactory::create(shape, fields)
//!   ├── timex (required for every shape)
//!   ├── Date / Time / DateTime → Calendar::parse_*("value")
//!   ├── Duration              → i64 seconds + DurationModifier
//!   ├── *Range                → range_builder::build_interval
//!   └── Set                   → no payload
//! ```

use super::range_builder::{self, PointParser, required};
use crate::models::{
    BaselineCalendar, Calendar, DurationModifier, FieldMap, MOD_FIELD, PreciseCalendar, Shape,
    TemporalKind, TemporalValue,
};
use crate::{Error, Result};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key holding the Timex expression.
pub const TIMEX_FIELD: &str = "timex";
/// Key holding the literal of point and duration shapes.
pub const VALUE_FIELD: &str = "value";
/// Pattern reported for malformed duration literals.
pub const SECONDS_PATTERN: &str = "integer seconds";

/// Identifies a factory implementation, e.g. for cache keys and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactoryKind {
    /// [`BaselineFactory`].
    #[default]
    Baseline,
    /// [`PreciseFactory`].
    Precise,
}

impl FactoryKind {
    /// Returns all factory kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Baseline, Self::Precise]
    }

    /// Returns the kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Precise => "precise",
        }
    }

    /// Parses a kind name case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for unknown names.
    pub fn parse(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown factory kind: {s}")))
    }
}

impl fmt::Display for FactoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FactoryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Builds typed values from engine dictionaries.
///
/// Implementations must be stateless so one instance can serve concurrent calls.
pub trait ObjectFactory: Default + Send + Sync + 'static {
    /// Calendar the produced values are expressed in.
    type Calendar: Calendar;

    /// Representation family, reported in logs and metrics. Factories sharing a
    /// kind still get separate cache entries.
    const KIND: FactoryKind;

    /// Creates the value for `shape` from one dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] without a `timex`, or any error of the shape hook.
    fn create(&self, shape: Shape, fields: &FieldMap) -> Result<TemporalValue<Self::Calendar>> {
        let timex = required(shape, fields, TIMEX_FIELD)?;
        if timex.is_empty() {
            return Err(Error::MissingField {
                shape,
                field: TIMEX_FIELD,
            });
        }

        let kind = match shape {
            Shape::Date => self.create_date(fields)?,
            Shape::Time => self.create_time(fields)?,
            Shape::DateTime => self.create_date_time(fields)?,
            Shape::Duration => self.create_duration(fields)?,
            Shape::DateRange => self.create_date_range(fields)?,
            Shape::TimeRange => self.create_time_range(fields)?,
            Shape::DateTimeRange => self.create_date_time_range(fields)?,
            Shape::Set => self.create_set(fields)?,
        };

        Ok(TemporalValue::new(timex, kind))
    }

    /// Creates a value from a shape name such as `daterange`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedShape`] if `tag` names no shape.
    fn create_from_tag(&self, tag: &str, fields: &FieldMap) -> Result<TemporalValue<Self::Calendar>> {
        let shape = Shape::parse(tag).ok_or_else(|| Error::UnrecognizedShape(tag.to_string()))?;
        self.create(shape, fields)
    }

    /// Parses `value` as a `yyyy-MM-dd` date.
    fn create_date(&self, fields: &FieldMap) -> Result<TemporalKind<Self::Calendar>> {
        let value = parse_value(Shape::Date, fields, Self::Calendar::parse_date)?;
        Ok(TemporalKind::Date { value })
    }

    /// Parses `value` as a `HH:mm:ss` time.
    fn create_time(&self, fields: &FieldMap) -> Result<TemporalKind<Self::Calendar>> {
        let value = parse_value(Shape::Time, fields, Self::Calendar::parse_time)?;
        Ok(TemporalKind::Time { value })
    }

    /// Parses `value` as a `yyyy-MM-dd HH:mm:ss` date-time.
    fn create_date_time(&self, fields: &FieldMap) -> Result<TemporalKind<Self::Calendar>> {
        let value = parse_value(Shape::DateTime, fields, Self::Calendar::parse_date_time)?;
        Ok(TemporalKind::DateTime { value })
    }

    /// Parses `value` as whole seconds and `Mod` as a [`DurationModifier`].
    fn create_duration(&self, fields: &FieldMap) -> Result<TemporalKind<Self::Calendar>> {
        let text = required(Shape::Duration, fields, VALUE_FIELD)?;
        let malformed = || Error::MalformedTemporalLiteral {
            shape: Shape::Duration,
            field: VALUE_FIELD.to_string(),
            text: text.to_string(),
            pattern: SECONDS_PATTERN,
        };
        let seconds: i64 = text.parse().map_err(|_| malformed())?;
        let value = TimeDelta::try_seconds(seconds).ok_or_else(malformed)?;

        let modifier = fields
            .get(MOD_FIELD)
            .map(String::as_str)
            .map(DurationModifier::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(TemporalKind::Duration { value, modifier })
    }

    /// Builds a date interval from `start`/`end`/`Mod`.
    fn create_date_range(&self, fields: &FieldMap) -> Result<TemporalKind<Self::Calendar>> {
        let value =
            range_builder::build_interval(Shape::DateRange, fields, Self::Calendar::parse_date)?;
        Ok(TemporalKind::DateRange { value })
    }

    /// Builds a time interval from `start`/`end`/`Mod`.
    fn create_time_range(&self, fields: &FieldMap) -> Result<TemporalKind<Self::Calendar>> {
        let value =
            range_builder::build_interval(Shape::TimeRange, fields, Self::Calendar::parse_time)?;
        Ok(TemporalKind::TimeRange { value })
    }

    /// Builds a date-time interval from `start`/`end`/`Mod`.
    fn create_date_time_range(&self, fields: &FieldMap) -> Result<TemporalKind<Self::Calendar>> {
        let value = range_builder::build_interval(
            Shape::DateTimeRange,
            fields,
            Self::Calendar::parse_date_time,
        )?;
        Ok(TemporalKind::DateTimeRange { value })
    }

    /// Sets carry no decodable payload.
    fn create_set(&self, _fields: &FieldMap) -> Result<TemporalKind<Self::Calendar>> {
        Ok(TemporalKind::Set)
    }
}

fn parse_value<T>(shape: Shape, fields: &FieldMap, parse: PointParser<T>) -> Result<T> {
    range_builder::parse_field(shape, fields, VALUE_FIELD, parse)
}

/// Produces values in the [`BaselineCalendar`] (every point a `NaiveDateTime`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineFactory;

impl ObjectFactory for BaselineFactory {
    type Calendar = BaselineCalendar;

    const KIND: FactoryKind = FactoryKind::Baseline;
}

/// Produces values in the [`PreciseCalendar`] (`NaiveDate`, `NaiveTime`, `NaiveDateTime`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PreciseFactory;

impl ObjectFactory for PreciseFactory {
    type Calendar = PreciseCalendar;

    const KIND: FactoryKind = FactoryKind::Precise;
}
