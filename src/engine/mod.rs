//! Recognition engine seam.
//!
//! The natural-language grammar is an external collaborator. The crate consumes it
//! through two traits:
//!
//! - [`EngineProvider`] compiles an engine for a locale. Compilation is the
//!   expensive step that [`RecognizerCache`](crate::RecognizerCache) pays once per key.
//! - [`RecognitionEngine`] parses content into [`RawMatch`]es.
//!
//! [`ReplayEngine`] and [`ReplayProvider`] implement the seam over recorded engine
//! output in the engine's published JSON test format.

mod replay;

pub use replay::{RecordedCase, RecordedContext, ReplayEngine, ReplayProvider};

use crate::Result;
use crate::models::RawMatch;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// A compiled recognition engine for one locale.
pub trait RecognitionEngine: Send + Sync {
    /// The locale this engine was compiled for.
    fn locale(&self) -> &str;

    /// Recognizes date/time expressions in `content`.
    ///
    /// `reference` anchors relative expressions such as "5 years ago". When it is
    /// `None` the engine uses its own default reference instant.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to parse the content.
    fn parse(&self, content: &str, reference: Option<NaiveDateTime>) -> Result<Vec<RawMatch>>;
}

/// Compiles engines per locale.
pub trait EngineProvider: Send + Sync {
    /// Compiles an engine for `locale`.
    ///
    /// # Errors
    ///
    /// Returns an error if no engine can be built for the locale.
    fn compile(&self, locale: &str) -> Result<Arc<dyn RecognitionEngine>>;
}
