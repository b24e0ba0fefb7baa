//! Data models for recognized date/time values.
//!
//! Raw engine output ([`RawMatch`], [`FieldMap`]) is turned into [`MatchModel`]s
//! holding a [`Resolution`] of typed [`TemporalValue`]s.

pub mod calendar;
mod interval;
mod match_model;
mod modifier;
mod raw;
mod resolution;
mod shape;
mod value;

pub use calendar::{
    BaselineCalendar, Calendar, DATE_PATTERN, DATE_TIME_PATTERN, LiteralError, LiteralPattern,
    Point, PreciseCalendar, TIME_PATTERN,
};
pub use interval::Interval;
pub use match_model::MatchModel;
pub use modifier::{DurationModifier, MOD_FIELD, RangeModifier};
pub use raw::{FieldMap, NOT_RESOLVED, RawMatch, RawResolution, field_map};
pub use resolution::Resolution;
pub use shape::{Shape, TYPE_LABEL_PREFIX};
pub use value::{TemporalKind, TemporalValue};
