//! Top-level date/time recognition entry point.

use super::cache::RecognizerCache;
use super::factory::{BaselineFactory, FactoryKind, ObjectFactory, PreciseFactory};
use crate::Result;
use crate::engine::EngineProvider;
use crate::models::{BaselineCalendar, MatchModel, PreciseCalendar, Shape};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Default recognition locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Parameters of one recognition call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizeRequest {
    /// The content to scan.
    pub content: String,
    /// Engine locale.
    pub locale: String,
    /// Reference instant for relative expressions; `None` uses the engine default.
    pub reference: Option<NaiveDateTime>,
    /// Shapes to keep; `None` keeps all.
    pub shapes: Option<HashSet<Shape>>,
}

impl RecognizeRequest {
    /// Creates a request for `content` with the default locale, no reference
    /// instant and no shape filter.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            locale: DEFAULT_LOCALE.to_string(),
            reference: None,
            shapes: None,
        }
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the reference instant.
    #[must_use]
    pub const fn with_reference(mut self, reference: NaiveDateTime) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Restricts results to `shapes`.
    #[must_use]
    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.shapes = Some(shapes.into_iter().collect());
        self
    }
}

/// Recognition results in the representation chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "factory", content = "matches", rename_all = "lowercase")]
pub enum Recognized {
    /// Results built by [`BaselineFactory`].
    Baseline(Vec<MatchModel<BaselineCalendar>>),
    /// Results built by [`PreciseFactory`].
    Precise(Vec<MatchModel<PreciseCalendar>>),
}

impl Recognized {
    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Baseline(m) => m.len(),
            Self::Precise(m) => m.len(),
        }
    }

    /// Whether nothing was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The factory kind that produced these results.
    #[must_use]
    pub const fn kind(&self) -> FactoryKind {
        match self {
            Self::Baseline(_) => FactoryKind::Baseline,
            Self::Precise(_) => FactoryKind::Precise,
        }
    }

    /// Renders every match with its `Display` form, one block per match.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        match self {
            Self::Baseline(m) => m.iter().map(ToString::to_string).collect(),
            Self::Precise(m) => m.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Service for recognizing date/time expressions.
///
/// Holds a shared [`RecognizerCache`]; clones share the cache.
#[derive(Debug, Clone)]
pub struct DateTimeService {
    cache: Arc<RecognizerCache>,
}

impl DateTimeService {
    /// Creates a service over an existing cache.
    #[must_use]
    pub const fn new(cache: Arc<RecognizerCache>) -> Self {
        Self { cache }
    }

    /// Creates a service with a fresh cache over `provider`.
    #[must_use]
    pub fn with_provider(provider: impl EngineProvider + 'static) -> Self {
        Self::new(Arc::new(RecognizerCache::new(Arc::new(provider))))
    }

    /// The underlying cache.
    #[must_use]
    pub const fn cache(&self) -> &Arc<RecognizerCache> {
        &self.cache
    }

    /// Recognizes date/time expressions with factory `F`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be compiled for the request locale,
    /// the engine fails, or any match fails to build.
    pub fn recognize<F: ObjectFactory>(
        &self,
        request: &RecognizeRequest,
    ) -> Result<Vec<MatchModel<F::Calendar>>> {
        let recognizer = self.cache.get_or_create::<F>(&request.locale)?;
        recognizer.recognize(
            &request.content,
            request.reference,
            request.shapes.as_ref(),
        )
    }

    /// Recognizes with the factory selected by `kind`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::recognize`].
    pub fn recognize_kind(
        &self,
        kind: FactoryKind,
        request: &RecognizeRequest,
    ) -> Result<Recognized> {
        match kind {
            FactoryKind::Baseline => self
                .recognize::<BaselineFactory>(request)
                .map(Recognized::Baseline),
            FactoryKind::Precise => self
                .recognize::<PreciseFactory>(request)
                .map(Recognized::Precise),
        }
    }
}
