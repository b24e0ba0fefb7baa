//! # Recognizers `DateTime`
//!
//! Strongly-typed resolutions for the output of a natural-language date/time
//! recognition engine.
//!
//! The engine reports each recognized span as a type label (`datetimeV2.daterange`),
//! a Timex expression and a list of string-keyed field dictionaries. This crate
//! turns those dictionaries into typed values: dates, times, date-times, ranges
//! (including open-ended "before"/"after" ranges), durations and sets.
//!
//! ## Features
//!
//! - A closed [`TemporalKind`] sum type covering the eight recognized [`Shape`]s
//! - Two interchangeable calendar representations, selected through an
//!   [`ObjectFactory`]: [`BaselineFactory`] and [`PreciseFactory`]
//! - Open-ended ranges backed by sentinel bounds ([`Interval`])
//! - A process-wide [`RecognizerCache`] that compiles each engine once per
//!   `(locale, factory kind)`
//!
//! ## Example
//!
//! ```rust,ignore
//! use recognizers_datetime::{DateTimeService, PreciseFactory, RecognizeRequest, Shape};
//!
//! let service = DateTimeService::with_provider(provider);
//! let matches = service.recognize::<PreciseFactory>(
//!     &RecognizeRequest::new("\"Within 3 years\", he said this 5 years ago.")
//!         .with_shapes([Shape::DateRange]),
//! )?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod observability;
pub mod services;

pub use config::RecognizerConfig;
pub use engine::{EngineProvider, RecognitionEngine, ReplayEngine, ReplayProvider};
pub use models::{
    BaselineCalendar, Calendar, DurationModifier, FieldMap, Interval, MatchModel,
    PreciseCalendar, RangeModifier, RawMatch, Resolution, Shape, TemporalKind, TemporalValue,
};
pub use services::{
    BaselineFactory, DateTimeRecognizer, DateTimeService, FactoryKind, ObjectFactory,
    PreciseFactory, RecognizeRequest, Recognized, RecognizerCache,
};

/// Error type for recognizer operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `UnrecognizedShape` | A type label or shape name maps to none of the eight shapes |
/// | `MalformedTemporalLiteral` | A field's text does not match the fixed pattern of its shape |
/// | `InvalidModifier` | A `Mod` field is not a member of the modifier enum |
/// | `InvertedRangeBounds` | A plain interval is built with `start > end` |
/// | `MissingField` | A field dictionary lacks a key its shape requires |
/// | `InvalidInput` | Caller input is malformed (factory kind, reference instant, log format) |
/// | `OperationFailed` | Engine compilation or parsing, file I/O, logging init fail |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A shape tag does not map to any known variant.
    #[error("unrecognized datetime shape: {0}")]
    UnrecognizedShape(String),

    /// A field's text does not match the expected pattern for its shape.
    #[error("malformed {shape} literal in field '{field}': \"{text}\" does not match \"{pattern}\"")]
    MalformedTemporalLiteral {
        /// The shape being constructed.
        shape: models::Shape,
        /// The offending field name.
        field: String,
        /// The raw text of the field.
        text: String,
        /// The fixed pattern the text was expected to follow.
        pattern: &'static str,
    },

    /// A `Mod` field holds a value that is not a member of the modifier enum.
    #[error("invalid {expected} value: \"{value}\"")]
    InvalidModifier {
        /// The raw modifier text.
        value: String,
        /// Name of the modifier enum that was expected.
        expected: &'static str,
    },

    /// A plain two-ended interval was built with its start after its end.
    #[error("range start {start} is after range end {end}")]
    InvertedRangeBounds {
        /// The rendered start bound.
        start: String,
        /// The rendered end bound.
        end: String,
    },

    /// A field dictionary is missing a key required by its shape.
    #[error("{shape} resolution is missing required field '{field}'")]
    MissingField {
        /// The shape being constructed.
        shape: models::Shape,
        /// The missing key.
        field: &'static str,
    },

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for recognizer operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnrecognizedShape("datetimeV2.fortnight".to_string());
        assert_eq!(
            err.to_string(),
            "unrecognized datetime shape: datetimeV2.fortnight"
        );

        let err = Error::MalformedTemporalLiteral {
            shape: models::Shape::Date,
            field: "value".to_string(),
            text: "2016/02/01".to_string(),
            pattern: "yyyy-MM-dd",
        };
        assert_eq!(
            err.to_string(),
            "malformed date literal in field 'value': \"2016/02/01\" does not match \"yyyy-MM-dd\""
        );

        let err = Error::InvalidModifier {
            value: "around".to_string(),
            expected: "RangeModifier",
        };
        assert_eq!(err.to_string(), "invalid RangeModifier value: \"around\"");

        let err = Error::OperationFailed {
            operation: "compile_engine".to_string(),
            cause: "no fixture".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "operation 'compile_engine' failed: no fixture"
        );
    }

    #[test]
    fn test_missing_field_display() {
        let err = Error::MissingField {
            shape: models::Shape::DateTimeRange,
            field: "start",
        };
        assert_eq!(
            err.to_string(),
            "datetimerange resolution is missing required field 'start'"
        );
    }
}
