//! CLI command for recognizing date/time expressions.

use crate::config::RecognizerConfig;
use crate::engine::ReplayProvider;
use crate::models::Shape;
use crate::services::{DateTimeService, FactoryKind, RecognizeRequest, Recognized};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Accepted `--reference` formats.
const REFERENCE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable blocks (default).
    #[default]
    Text,
    /// JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidInput(format!("unknown output format: {other}"))),
        }
    }
}

/// Arguments of the `recognize` command.
#[derive(Debug, Clone, Default)]
pub struct RecognizeArgs {
    /// Text to scan.
    pub content: String,
    /// Locale; the configured default when `None`.
    pub locale: Option<String>,
    /// Factory; the configured default when `None`.
    pub factory: Option<FactoryKind>,
    /// Reference instant, see [`parse_reference`].
    pub reference: Option<String>,
    /// Shapes to keep; all when empty.
    pub shapes: Vec<Shape>,
    /// Fixture directory; the configured one when `None`.
    pub fixtures: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
}

/// Parses a `--reference` value.
///
/// Accepts `yyyy-MM-ddTHH:mm:ss`, `yyyy-MM-dd HH:mm:ss` or a bare `yyyy-MM-dd`
/// (midnight).
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the text matches none of the formats.
pub fn parse_reference(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    REFERENCE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "invalid reference instant '{text}', expected yyyy-MM-ddTHH:mm:ss"
            ))
        })
}

/// Runs recognition for the command arguments.
///
/// # Errors
///
/// Returns an error if the reference instant is invalid, no recorded engine
/// output exists for the locale, or a match fails to build.
pub fn run_recognize(config: &RecognizerConfig, args: &RecognizeArgs) -> Result<Recognized> {
    let fixture_dir = args
        .fixtures
        .clone()
        .unwrap_or_else(|| config.fixture_dir.clone());
    let locale = args
        .locale
        .clone()
        .unwrap_or_else(|| config.default_locale.clone());
    let factory = args.factory.unwrap_or(config.default_factory);

    let mut request = RecognizeRequest::new(args.content.clone()).with_locale(locale);
    if let Some(reference) = args.reference.as_deref() {
        request = request.with_reference(parse_reference(reference)?);
    }
    if !args.shapes.is_empty() {
        request = request.with_shapes(args.shapes.iter().copied());
    }

    let service = DateTimeService::with_provider(ReplayProvider::from_dir(fixture_dir));
    service.recognize_kind(factory, &request)
}

/// Writes results as text blocks.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_text<W: Write>(writer: &mut W, recognized: &Recognized) -> io::Result<()> {
    if recognized.is_empty() {
        writeln!(writer, "No date/time expressions recognized.")?;
        return Ok(());
    }
    for block in recognized.render() {
        writeln!(writer, "{block}")?;
    }
    Ok(())
}

/// Writes results as JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(writer: &mut W, recognized: &Recognized) -> Result<()> {
    let json = serde_json::to_string_pretty(recognized).map_err(|e| Error::OperationFailed {
        operation: "serialize_matches".to_string(),
        cause: e.to_string(),
    })?;
    writeln!(writer, "{json}").map_err(write_error)
}

/// Executes the recognize command.
///
/// # Errors
///
/// Returns an error if recognition or output fails.
pub fn cmd_recognize(config: &RecognizerConfig, args: &RecognizeArgs) -> Result<()> {
    let recognized = run_recognize(config, args)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match args.format {
        OutputFormat::Text => write_text(&mut handle, &recognized).map_err(write_error),
        OutputFormat::Json => write_json(&mut handle, &recognized),
    }
}

#[allow(clippy::needless_pass_by_value)]
fn write_error(e: io::Error) -> Error {
    Error::OperationFailed {
        operation: "write_output".to_string(),
        cause: e.to_string(),
    }
}
