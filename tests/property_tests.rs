//! Property-based tests for typed resolution.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Date literals round-trip through both calendars
//! - Open-ended ranges carry the sentinel on the open side
//! - Plain ranges reject inverted bounds
//! - Match building is idempotent
//! - Shape parsing is case-insensitive
//! - Literals that break the fixed layout are rejected

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use recognizers_datetime::models::field_map;
use recognizers_datetime::services::{build_interval, build_match_model};
use recognizers_datetime::{
    BaselineCalendar, BaselineFactory, Calendar, Error, PreciseCalendar, PreciseFactory,
    RangeModifier, RawMatch, Shape,
};

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9000, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap())
}

fn date_literal(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

proptest! {
    /// Property: a `yyyy-MM-dd` literal round-trips through the precise calendar.
    #[test]
    fn prop_precise_date_roundtrip(date in arb_date()) {
        let literal = date_literal(date);
        let parsed = PreciseCalendar::parse_date(&literal).unwrap();
        prop_assert_eq!(parsed, date);
        prop_assert_eq!(PreciseCalendar::format_date(&parsed), literal);
    }

    /// Property: the baseline calendar puts dates at midnight.
    #[test]
    fn prop_baseline_date_is_midnight(date in arb_date()) {
        let parsed = BaselineCalendar::parse_date(&date_literal(date)).unwrap();
        prop_assert_eq!(parsed, date.and_time(NaiveTime::MIN));
    }

    /// Property: a `HH:mm:ss` literal round-trips through both calendars.
    #[test]
    fn prop_time_roundtrip(time in arb_time()) {
        let literal = time.format("%H:%M:%S").to_string();
        let precise = PreciseCalendar::parse_time(&literal).unwrap();
        let baseline = BaselineCalendar::parse_time(&literal).unwrap();
        prop_assert_eq!(precise, time);
        prop_assert_eq!(baseline.time(), time);
        prop_assert_eq!(BaselineCalendar::format_time(&baseline), literal);
    }

    /// Property: open-start modifiers put the minimum sentinel at the start.
    #[test]
    fn prop_open_start_sentinel(
        date in arb_date(),
        modifier in prop::sample::select(vec!["before", "until", "BEFORE", "Until"]),
    ) {
        let end = date_literal(date);
        let fields = field_map([("start", "ignored"), ("end", end.as_str()), ("Mod", modifier)]);
        let interval =
            build_interval(Shape::DateRange, &fields, PreciseCalendar::parse_date).unwrap();
        prop_assert_eq!(*interval.start(), NaiveDate::MIN);
        prop_assert_eq!(*interval.end(), date);
        prop_assert!(interval.is_open_start());
    }

    /// Property: open-end modifiers put the maximum sentinel at the end.
    #[test]
    fn prop_open_end_sentinel(
        date in arb_date(),
        time in arb_time(),
        modifier in prop::sample::select(vec!["after", "since"]),
    ) {
        let start = date.and_time(time).format("%Y-%m-%d %H:%M:%S").to_string();
        let fields = field_map([("start", start.as_str()), ("Mod", modifier)]);
        let interval =
            build_interval(Shape::DateTimeRange, &fields, PreciseCalendar::parse_date_time)
                .unwrap();
        prop_assert_eq!(*interval.start(), date.and_time(time));
        prop_assert_eq!(*interval.end(), NaiveDateTime::MAX);
        prop_assert!(interval.start() <= interval.end());
    }

    /// Property: plain ranges accept ordered bounds and reject inverted ones.
    #[test]
    fn prop_plain_range_ordering(a in arb_date(), b in arb_date()) {
        let (a_lit, b_lit) = (date_literal(a), date_literal(b));
        let fields = field_map([("start", a_lit.as_str()), ("end", b_lit.as_str())]);
        let result = build_interval(Shape::DateRange, &fields, PreciseCalendar::parse_date);
        if a <= b {
            let interval = result.unwrap();
            prop_assert_eq!(interval.modifier(), RangeModifier::None);
            prop_assert!(interval.contains(&a));
            prop_assert!(interval.contains(&b));
        } else {
            let inverted = matches!(result, Err(Error::InvertedRangeBounds { .. }));
            prop_assert!(inverted);
        }
    }

    /// Property: building a match twice yields equal models in both representations.
    #[test]
    fn prop_match_build_idempotent(start in arb_date(), days in 0i64..3650, offset in 0usize..200) {
        let end = start.checked_add_signed(chrono::TimeDelta::days(days)).unwrap_or(start);
        let (start_lit, end_lit) = (date_literal(start), date_literal(end));
        let timex = format!("({start_lit},{end_lit},P{days}D)");
        let raw = RawMatch::new(
            "some range",
            offset,
            10,
            "datetimeV2.daterange",
            vec![field_map([
                ("timex", timex.as_str()),
                ("type", "daterange"),
                ("start", start_lit.as_str()),
                ("end", end_lit.as_str()),
            ])],
        );

        let a = build_match_model(&raw, &PreciseFactory).unwrap();
        let b = build_match_model(&raw, &PreciseFactory).unwrap();
        prop_assert!(a.is_some());
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.map(|m| m.end()), Some(offset + 9));

        let c = build_match_model(&raw, &BaselineFactory).unwrap();
        let d = build_match_model(&raw, &BaselineFactory).unwrap();
        prop_assert_eq!(c, d);
    }

    /// Property: shape keys parse regardless of case.
    #[test]
    fn prop_shape_parse_case_insensitive(idx in 0usize..8) {
        let shape = Shape::all()[idx];
        let key = shape.as_str();
        prop_assert_eq!(Shape::parse(&key.to_uppercase()), Some(shape));
        prop_assert_eq!(Shape::from_type_label(&shape.type_label()).unwrap(), shape);
    }

    /// Property: literals with extra characters are rejected.
    #[test]
    fn prop_padded_literal_rejected(date in arb_date(), pad in "[ 0-9a-z]{1,3}") {
        let literal = format!("{}{pad}", date_literal(date));
        prop_assert!(PreciseCalendar::parse_date(&literal).is_err());
    }

    /// Property: a blank or sign in place of any digit is rejected, so every
    /// accepted literal formats back to itself.
    #[test]
    fn prop_blanked_digit_rejected(
        date in arb_date(),
        idx in prop::sample::select(vec![0usize, 1, 2, 3, 5, 6, 8, 9]),
        filler in prop::sample::select(vec![b' ', b'+', b'-']),
    ) {
        let mut literal = date_literal(date).into_bytes();
        literal[idx] = filler;
        let literal = String::from_utf8(literal).unwrap();
        prop_assert!(PreciseCalendar::parse_date(&literal).is_err());
        prop_assert!(BaselineCalendar::parse_date(&literal).is_err());
    }
}
