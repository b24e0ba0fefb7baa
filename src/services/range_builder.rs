//! Interval construction from `start`/`end`/`Mod` fields.
//!
//! A range dictionary carries `start` and `end` literals and an optional `Mod`:
//!
//! | `Mod` | `start` | `end` |
//! |-------|---------|-------|
//! | absent / `none` | parsed | parsed |
//! | `before`, `until` | type minimum | parsed |
//! | `after`, `since` | parsed | type maximum |
//!
//! Only plain ranges are checked for `start <= end`; open ranges hold a sentinel.

use crate::models::{FieldMap, Interval, LiteralError, MOD_FIELD, Point, RangeModifier, Shape};
use crate::{Error, Result};

/// Parser for one point type under its fixed literal pattern.
pub type PointParser<T> = fn(&str) -> std::result::Result<T, LiteralError>;

/// Start bound key.
pub const START_FIELD: &str = "start";
/// End bound key.
pub const END_FIELD: &str = "end";

/// Builds an interval of `T` from a range dictionary.
///
/// # Errors
///
/// - [`Error::InvalidModifier`] if `Mod` is not a [`RangeModifier`] member.
/// - [`Error::MissingField`] if a bound that must be parsed is absent.
/// - [`Error::MalformedTemporalLiteral`] if a parsed bound does not match its pattern.
/// - [`Error::InvertedRangeBounds`] if a plain range has `start > end`.
pub fn build_interval<T: Point>(
    shape: Shape,
    fields: &FieldMap,
    parse: PointParser<T>,
) -> Result<Interval<T>> {
    let modifier = fields
        .get(MOD_FIELD)
        .map(String::as_str)
        .map(RangeModifier::parse)
        .transpose()?
        .unwrap_or_default();

    let start = if modifier.is_open_start() {
        T::min_value()
    } else {
        parse_field(shape, fields, START_FIELD, parse)?
    };

    let end = if modifier.is_open_end() {
        T::max_value()
    } else {
        parse_field(shape, fields, END_FIELD, parse)?
    };

    match modifier {
        RangeModifier::None => Interval::new(start, end),
        _ => Ok(Interval::with_modifier(modifier, start, end)),
    }
}

/// Looks up a required key.
pub(crate) fn required<'a>(
    shape: Shape,
    fields: &'a FieldMap,
    field: &'static str,
) -> Result<&'a str> {
    fields
        .get(field)
        .map(String::as_str)
        .ok_or(Error::MissingField { shape, field })
}

/// Looks up a required key and parses it with `parse`.
pub(crate) fn parse_field<T>(
    shape: Shape,
    fields: &FieldMap,
    field: &'static str,
    parse: PointParser<T>,
) -> Result<T> {
    let text = required(shape, fields, field)?;
    parse(text).map_err(|e| Error::MalformedTemporalLiteral {
        shape,
        field: field.to_string(),
        text: text.to_string(),
        pattern: e.pattern.display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Calendar, PreciseCalendar, field_map};
    use chrono::{NaiveDate, NaiveTime};
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    fn date_range(fields: &FieldMap) -> Result<Interval<NaiveDate>> {
        build_interval(Shape::DateRange, fields, PreciseCalendar::parse_date)
    }

    #[test]
    fn test_plain_range() {
        let fields = field_map([("start", "2018-03-14"), ("end", "2021-03-14")]);
        let interval = date_range(&fields).ok();
        assert_eq!(interval.map(|i| *i.start()), Some(date(2018, 3, 14)));
        assert_eq!(interval.map(|i| *i.end()), Some(date(2021, 3, 14)));
        assert_eq!(interval.map(|i| i.modifier()), Some(RangeModifier::None));
    }

    #[test]
    fn test_explicit_none_modifier() {
        let fields = field_map([("start", "2018-03-14"), ("end", "2021-03-14"), ("Mod", "none")]);
        assert!(date_range(&fields).is_ok());
    }

    #[test_case("before" ; "before")]
    #[test_case("until" ; "until")]
    #[test_case("Before" ; "mixed case")]
    fn test_open_start(modifier: &str) {
        // The start field is ignored entirely, even when malformed.
        let fields = field_map([("start", "garbage"), ("end", "2018-03-14"), ("Mod", modifier)]);
        let interval = date_range(&fields).ok();
        assert_eq!(interval.map(|i| *i.start()), Some(NaiveDate::MIN));
        assert_eq!(interval.map(|i| *i.end()), Some(date(2018, 3, 14)));
    }

    #[test_case("after" ; "after")]
    #[test_case("since" ; "since")]
    fn test_open_end(modifier: &str) {
        let fields = field_map([("start", "2018-03-14"), ("Mod", modifier)]);
        let interval = date_range(&fields).ok();
        assert_eq!(interval.map(|i| *i.start()), Some(date(2018, 3, 14)));
        assert_eq!(interval.map(|i| *i.end()), Some(NaiveDate::MAX));
    }

    #[test]
    fn test_open_time_range() {
        let fields = field_map([("end", "16:00:00"), ("Mod", "before")]);
        let interval = build_interval(Shape::TimeRange, &fields, PreciseCalendar::parse_time).ok();
        assert_eq!(interval.map(|i| *i.start()), Some(NaiveTime::MIN));
    }

    #[test]
    fn test_invalid_modifier() {
        let fields = field_map([("start", "2018-03-14"), ("end", "2021-03-14"), ("Mod", "approx")]);
        assert!(matches!(
            date_range(&fields),
            Err(Error::InvalidModifier { ref value, .. }) if value == "approx"
        ));
    }

    #[test]
    fn test_malformed_bound_names_field() {
        let fields = field_map([("start", "2018-03-14"), ("end", "2021-02-30")]);
        assert!(matches!(
            date_range(&fields),
            Err(Error::MalformedTemporalLiteral { shape: Shape::DateRange, ref field, ref text, pattern: "yyyy-MM-dd" })
                if field == "end" && text == "2021-02-30"
        ));
    }

    #[test]
    fn test_missing_bound() {
        let fields = field_map([("start", "2018-03-14")]);
        assert!(matches!(
            date_range(&fields),
            Err(Error::MissingField { shape: Shape::DateRange, field: "end" })
        ));
    }

    #[test]
    fn test_inverted_plain_range() {
        let fields = field_map([("start", "2021-03-14"), ("end", "2018-03-14")]);
        assert!(matches!(
            date_range(&fields),
            Err(Error::InvertedRangeBounds { .. })
        ));
    }
}
