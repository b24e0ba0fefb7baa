//! Structured logging configuration.

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;

/// Environment variable selecting the log format.
pub const ENV_LOG_FORMAT: &str = "RECOGNIZERS_LOG_FORMAT";
/// Environment variable naming a log file.
pub const ENV_LOG_FILE: &str = "RECOGNIZERS_LOG_FILE";
/// Standard `EnvFilter` directive variable.
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Returns the format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }

    /// Parses a format name case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for unknown names.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidInput(format!("unknown log format: {other}"))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// `EnvFilter` directive.
    pub filter: String,
    /// Log file; stderr when `None`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: DEFAULT_FILTER.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Builds logging configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `RECOGNIZERS_LOG_FORMAT` is unknown.
    pub fn from_env(verbose: bool) -> Result<Self> {
        Self::from_settings(None, verbose)
    }

    /// Builds logging configuration from config settings with env overrides.
    ///
    /// `RUST_LOG` wins over the configured filter, which wins over the
    /// verbosity default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the configured or environment format is unknown.
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Result<Self> {
        Self::resolve(settings, verbose, |key| std::env::var(key).ok())
    }

    fn resolve(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let format = lookup(ENV_LOG_FORMAT)
            .or_else(|| settings.and_then(|s| s.format.clone()))
            .map(|f| LogFormat::parse(&f))
            .transpose()?
            .unwrap_or_default();

        let filter = lookup(ENV_LOG_FILTER)
            .filter(|f| !f.trim().is_empty())
            .or_else(|| settings.and_then(|s| s.filter.clone()))
            .unwrap_or_else(|| {
                let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
                default.to_string()
            });

        let file = lookup(ENV_LOG_FILE)
            .map(PathBuf::from)
            .or_else(|| settings.and_then(|s| s.file.clone()));

        Ok(Self {
            format,
            filter,
            file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test_case("json", LogFormat::Json)]
    #[test_case("JSON", LogFormat::Json)]
    #[test_case("pretty", LogFormat::Pretty)]
    #[test_case("text", LogFormat::Pretty)]
    fn test_parse_format(input: &str, expected: LogFormat) {
        assert_eq!(LogFormat::parse(input).ok(), Some(expected));
    }

    #[test]
    fn test_unknown_format() {
        assert!(matches!(LogFormat::parse("xml"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_verbosity_default() {
        let quiet = LoggingConfig::resolve(None, false, no_env).ok();
        assert_eq!(quiet, Some(LoggingConfig::default()));

        let verbose = LoggingConfig::resolve(None, true, no_env).ok();
        assert_eq!(verbose.map(|c| c.filter), Some("debug".to_string()));
    }

    #[test]
    fn test_settings_then_env() {
        let settings = LoggingSettings {
            format: Some("json".to_string()),
            filter: Some("info".to_string()),
            file: Some(PathBuf::from("/tmp/recognizers.log")),
        };
        let config = LoggingConfig::resolve(Some(&settings), true, no_env).ok();
        assert_eq!(config.as_ref().map(|c| c.format), Some(LogFormat::Json));
        assert_eq!(config.as_ref().map(|c| c.filter.as_str()), Some("info"));

        let env = |key: &str| match key {
            ENV_LOG_FORMAT => Some("pretty".to_string()),
            ENV_LOG_FILTER => Some("trace".to_string()),
            _ => None,
        };
        let config = LoggingConfig::resolve(Some(&settings), false, env).ok();
        assert_eq!(config.as_ref().map(|c| c.format), Some(LogFormat::Pretty));
        assert_eq!(config.as_ref().map(|c| c.filter.as_str()), Some("trace"));
        assert_eq!(
            config.and_then(|c| c.file),
            Some(PathBuf::from("/tmp/recognizers.log"))
        );
    }

    #[test]
    fn test_invalid_env_format() {
        let env = |key: &str| (key == ENV_LOG_FORMAT).then(|| "yaml".to_string());
        assert!(LoggingConfig::resolve(None, false, env).is_err());
    }
}
