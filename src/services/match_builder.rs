//! Match model construction from raw engine matches.

use super::factory::ObjectFactory;
use crate::Result;
use crate::models::{FieldMap, MatchModel, NOT_RESOLVED, RawMatch, Resolution, Shape};

/// Key holding the engine's per-dictionary type name.
const TYPE_FIELD: &str = "type";

/// Builds a [`MatchModel`] from one raw match.
///
/// Placeholder dates the engine could not ground (`value == "not resolved"`) are
/// skipped. Returns `Ok(None)` when no alternative survives, so callers can drop
/// the match instead of emitting an empty model.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedShape`](crate::Error::UnrecognizedShape) for an
/// unknown type label, or the factory's error for the first malformed dictionary.
pub fn build_match_model<F: ObjectFactory>(
    raw: &RawMatch,
    factory: &F,
) -> Result<Option<MatchModel<F::Calendar>>> {
    let shape = Shape::from_type_label(&raw.type_label)?;

    let values = raw
        .field_maps()
        .iter()
        .filter(|fields| {
            let placeholder = is_placeholder(shape, fields);
            if placeholder {
                tracing::debug!(text = %raw.text, start = raw.start, "Skipping unresolved date");
            }
            !placeholder
        })
        .map(|fields| factory.create(shape, fields))
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        tracing::debug!(text = %raw.text, shape = %shape, "Dropping match with no resolved values");
        metrics::counter!("recognizer_matches_total", "outcome" => "dropped").increment(1);
        return Ok(None);
    }

    metrics::counter!("recognizer_matches_total", "outcome" => "kept").increment(1);
    Ok(Some(MatchModel::new(
        raw.text.clone(),
        raw.start,
        raw.end(),
        shape,
        Resolution::new(values),
    )))
}

/// Whether a dictionary is the engine's placeholder for an ungroundable date.
fn is_placeholder(shape: Shape, fields: &FieldMap) -> bool {
    let unresolved = fields.get("value").is_some_and(|v| v == NOT_RESOLVED);
    let date_like =
        shape == Shape::Date || fields.get(TYPE_FIELD).is_some_and(|t| t == Shape::Date.as_str());
    unresolved && date_like
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::models::{TemporalValue, field_map};
    use crate::services::{BaselineFactory, PreciseFactory};
    use chrono::NaiveDate;
    use test_case::test_case;

    fn date_match(values: Vec<FieldMap>) -> RawMatch {
        RawMatch::new("5 years ago", 31, 11, "datetimeV2.date", values)
    }

    #[test]
    fn test_builds_model() {
        let raw = date_match(vec![field_map([
            ("timex", "2013-03-14"),
            ("type", "date"),
            ("value", "2013-03-14"),
        ])]);
        let model = build_match_model(&raw, &PreciseFactory).ok().flatten();
        assert_eq!(model.as_ref().map(MatchModel::text), Some("5 years ago"));
        assert_eq!(model.as_ref().map(MatchModel::start), Some(31));
        assert_eq!(model.as_ref().map(MatchModel::end), Some(41));
        assert_eq!(model.as_ref().map(MatchModel::shape), Some(Shape::Date));
        assert_eq!(
            model
                .as_ref()
                .and_then(|m| m.resolution().first())
                .and_then(TemporalValue::as_date)
                .copied(),
            NaiveDate::from_ymd_opt(2013, 3, 14)
        );
    }

    #[test_case("2016-02-30" ; "february overflow")]
    #[test_case("2016-02-31" ; "february 31")]
    #[test_case("2016-04-31" ; "april 31")]
    #[test_case("2016-04-32" ; "day 32")]
    fn test_placeholder_only_match_is_dropped(timex: &str) {
        let raw = RawMatch::new(
            timex,
            0,
            timex.len(),
            "datetimeV2.date",
            vec![field_map([("timex", timex), ("type", "date"), ("value", NOT_RESOLVED)])],
        );
        assert!(matches!(build_match_model(&raw, &BaselineFactory), Ok(None)));
    }

    #[test]
    fn test_placeholder_alternative_is_skipped() {
        let raw = date_match(vec![
            field_map([("timex", "XXXX-02-30"), ("type", "date"), ("value", NOT_RESOLVED)]),
            field_map([("timex", "2013-03-14"), ("type", "date"), ("value", "2013-03-14")]),
        ]);
        let model = build_match_model(&raw, &PreciseFactory).ok().flatten();
        assert_eq!(model.map(|m| m.resolution().len()), Some(1));
    }

    #[test]
    fn test_placeholder_keyed_by_type_field() {
        // A date-typed placeholder under a non-date label is still skipped.
        let raw = RawMatch::new(
            "every 30th",
            0,
            10,
            "datetimeV2.set",
            vec![field_map([("timex", "XXXX-XX-30"), ("type", "date"), ("value", NOT_RESOLVED)])],
        );
        assert!(matches!(build_match_model(&raw, &PreciseFactory), Ok(None)));
    }

    #[test]
    fn test_set_with_not_resolved_value_is_kept() {
        let raw = RawMatch::new(
            "weekly",
            0,
            6,
            "datetimeV2.set",
            vec![field_map([("timex", "P1W"), ("type", "set"), ("value", NOT_RESOLVED)])],
        );
        let model = build_match_model(&raw, &PreciseFactory).ok().flatten();
        assert_eq!(model.map(|m| m.shape()), Some(Shape::Set));
    }

    #[test]
    fn test_no_dictionaries_is_dropped() {
        let raw = date_match(vec![]);
        assert!(matches!(build_match_model(&raw, &PreciseFactory), Ok(None)));
    }

    #[test]
    fn test_unknown_label() {
        let raw = RawMatch::new("x", 0, 1, "datetimeV2.fortnight", vec![]);
        assert!(matches!(
            build_match_model(&raw, &PreciseFactory),
            Err(Error::UnrecognizedShape(_))
        ));
    }

    #[test]
    fn test_malformed_dictionary_fails_the_match() {
        let raw = date_match(vec![
            field_map([("timex", "2013-03-14"), ("value", "2013-03-14")]),
            field_map([("timex", "2013-03-14"), ("value", "14/03/2013")]),
        ]);
        assert!(matches!(
            build_match_model(&raw, &PreciseFactory),
            Err(Error::MalformedTemporalLiteral { .. })
        ));
    }

    #[test]
    fn test_build_is_idempotent() {
        let raw = RawMatch::new(
            "Within 3 years",
            1,
            14,
            "datetimeV2.daterange",
            vec![field_map([
                ("timex", "(2018-03-14,2021-03-14,P3Y)"),
                ("type", "daterange"),
                ("start", "2018-03-14"),
                ("end", "2021-03-14"),
            ])],
        );
        let first = build_match_model(&raw, &BaselineFactory).ok().flatten();
        let second = build_match_model(&raw, &BaselineFactory).ok().flatten();
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
