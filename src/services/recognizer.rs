//! One compiled engine paired with one object factory.

use super::factory::ObjectFactory;
use super::match_builder::build_match_model;
use crate::Result;
use crate::engine::RecognitionEngine;
use crate::models::{MatchModel, Shape};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

/// Recognizes date/time expressions for one locale in one calendar representation.
///
/// Immutable after construction; share it behind an [`Arc`].
pub struct DateTimeRecognizer<F: ObjectFactory> {
    locale: String,
    engine: Arc<dyn RecognitionEngine>,
    factory: F,
}

impl<F: ObjectFactory> DateTimeRecognizer<F> {
    /// Pairs a compiled engine with a factory.
    #[must_use]
    pub fn new(locale: impl Into<String>, engine: Arc<dyn RecognitionEngine>, factory: F) -> Self {
        Self {
            locale: locale.into(),
            engine,
            factory,
        }
    }

    /// The locale the engine was compiled for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The factory building values.
    #[must_use]
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Runs the engine on `content` and builds typed match models.
    ///
    /// Matches whose shape is not in `shapes` are left out. Results keep the
    /// engine's emission order.
    ///
    /// # Errors
    ///
    /// Returns the engine's error, or the first error raised while building a
    /// match. No partial results are returned.
    #[instrument(
        skip(self, content, shapes),
        fields(locale = %self.locale, factory = %F::KIND, content_length = content.len())
    )]
    pub fn recognize(
        &self,
        content: &str,
        reference: Option<NaiveDateTime>,
        shapes: Option<&HashSet<Shape>>,
    ) -> Result<Vec<MatchModel<F::Calendar>>> {
        let raw_matches = self.engine.parse(content, reference)?;

        let mut models = Vec::with_capacity(raw_matches.len());
        for raw in &raw_matches {
            let Some(model) = build_match_model(raw, &self.factory)? else {
                continue;
            };
            if shapes.is_some_and(|s| !s.contains(&model.shape())) {
                metrics::counter!("recognizer_matches_total", "outcome" => "filtered").increment(1);
                continue;
            }
            models.push(model);
        }

        tracing::debug!(
            raw = raw_matches.len(),
            kept = models.len(),
            "Recognition complete"
        );
        Ok(models)
    }
}

impl<F: ObjectFactory> fmt::Debug for DateTimeRecognizer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTimeRecognizer")
            .field("locale", &self.locale)
            .field("factory", &F::KIND)
            .finish_non_exhaustive()
    }
}
