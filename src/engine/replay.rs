//! Replay of recorded engine output.

use super::{EngineProvider, RecognitionEngine};
use crate::models::RawMatch;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Context recorded alongside an engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordedContext {
    /// Reference instant the engine was run with, if any.
    #[serde(default)]
    pub reference_date_time: Option<NaiveDateTime>,
}

/// One recorded engine run: an input and the matches it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordedCase {
    /// The content passed to the engine.
    pub input: String,
    /// Run context.
    #[serde(default)]
    pub context: RecordedContext,
    /// The engine's matches, in emission order.
    #[serde(default)]
    pub results: Vec<RawMatch>,
}

impl RecordedCase {
    /// Creates a recorded case.
    #[must_use]
    pub fn new(
        input: impl Into<String>,
        reference: Option<NaiveDateTime>,
        results: Vec<RawMatch>,
    ) -> Self {
        Self {
            input: input.into(),
            context: RecordedContext {
                reference_date_time: reference,
            },
            results,
        }
    }
}

/// Engine that answers from recorded runs.
///
/// Lookup is by exact input. When a reference instant is supplied, a case recorded
/// with the same instant wins over other cases for the same input.
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    locale: String,
    cases: Vec<RecordedCase>,
}

impl ReplayEngine {
    /// Creates an engine from recorded cases.
    #[must_use]
    pub fn from_cases(locale: impl Into<String>, cases: Vec<RecordedCase>) -> Self {
        Self {
            locale: locale.into(),
            cases,
        }
    }

    /// Creates an engine from a JSON array of recorded cases.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationFailed`] if the JSON does not describe recorded cases.
    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self> {
        let cases: Vec<RecordedCase> =
            serde_json::from_str(json).map_err(|e| Error::OperationFailed {
                operation: "parse_recorded_cases".to_string(),
                cause: e.to_string(),
            })?;
        Ok(Self::from_cases(locale, cases))
    }

    /// Loads recorded cases from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationFailed`] if the file cannot be read or parsed.
    pub fn load(locale: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_recorded_cases".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        Self::from_json(locale, &json)
    }

    /// Number of recorded cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether no cases are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    fn find(&self, content: &str, reference: Option<NaiveDateTime>) -> Option<&RecordedCase> {
        let mut candidates = self.cases.iter().filter(|c| c.input == content).peekable();
        let first = candidates.peek().copied();
        reference
            .and_then(|r| candidates.find(|c| c.context.reference_date_time == Some(r)))
            .or(first)
    }
}

impl RecognitionEngine for ReplayEngine {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn parse(&self, content: &str, reference: Option<NaiveDateTime>) -> Result<Vec<RawMatch>> {
        self.find(content, reference).map_or_else(
            || {
                tracing::warn!(
                    locale = %self.locale,
                    content_length = content.len(),
                    "No recorded engine output for input"
                );
                Ok(Vec::new())
            },
            |case| Ok(case.results.clone()),
        )
    }
}

#[derive(Debug, Clone)]
enum ReplaySource {
    Directory(PathBuf),
    Memory(HashMap<String, Vec<RecordedCase>>),
}

/// Provides [`ReplayEngine`]s per locale.
///
/// Backed either by a fixture directory holding `<locale>.json` files or by
/// in-memory cases.
#[derive(Debug, Clone)]
pub struct ReplayProvider {
    source: ReplaySource,
}

impl ReplayProvider {
    /// Serves `<dir>/<locale>.json` for each locale.
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: ReplaySource::Directory(dir.into()),
        }
    }

    /// Creates a provider with no locales; add some with [`Self::with_cases`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            source: ReplaySource::Memory(HashMap::new()),
        }
    }

    /// Registers recorded cases for `locale`.
    ///
    /// Has no effect on a directory-backed provider.
    #[must_use]
    pub fn with_cases(mut self, locale: impl Into<String>, cases: Vec<RecordedCase>) -> Self {
        if let ReplaySource::Memory(ref mut locales) = self.source {
            locales.entry(locale.into()).or_default().extend(cases);
        }
        self
    }

    /// Path of the fixture file for `locale`, for directory-backed providers.
    ///
    /// `None` for in-memory providers and for locales that are not a plain
    /// language tag.
    #[must_use]
    pub fn fixture_path(&self, locale: &str) -> Option<PathBuf> {
        match &self.source {
            ReplaySource::Directory(dir) if is_locale_tag(locale) => {
                Some(dir.join(format!("{locale}.json")))
            },
            ReplaySource::Directory(_) | ReplaySource::Memory(_) => None,
        }
    }
}

/// Language tags such as `en`, `en-US` or `zh_Hans`: ASCII alphanumerics and
/// single `-`/`_` separators, so a tag never names another directory.
fn is_locale_tag(locale: &str) -> bool {
    !locale.is_empty()
        && locale
            .split(['-', '_'])
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric()))
}

impl EngineProvider for ReplayProvider {
    fn compile(&self, locale: &str) -> Result<Arc<dyn RecognitionEngine>> {
        let engine = match &self.source {
            ReplaySource::Directory(_) => {
                let path = self.fixture_path(locale).ok_or_else(|| {
                    Error::InvalidInput(format!("invalid locale '{locale}'"))
                })?;
                if !path.is_file() {
                    return Err(Error::OperationFailed {
                        operation: "compile_engine".to_string(),
                        cause: format!("no recorded cases for locale '{locale}' at {}", path.display()),
                    });
                }
                ReplayEngine::load(locale, &path)?
            },
            ReplaySource::Memory(locales) => {
                let cases = locales.get(locale).ok_or_else(|| Error::OperationFailed {
                    operation: "compile_engine".to_string(),
                    cause: format!("no recorded cases for locale '{locale}'"),
                })?;
                ReplayEngine::from_cases(locale, cases.clone())
            },
        };

        tracing::debug!(locale, cases = engine.len(), "Loaded recorded engine output");
        Ok(Arc::new(engine))
    }
}
