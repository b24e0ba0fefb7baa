//! Configuration management.
//!
//! Configuration is layered: built-in defaults, then a TOML file, then
//! environment variables.
//!
//! ```toml
//! default_locale = "en"
//! default_factory = "precise"
//! fixture_dir = "/var/lib/recognizers/fixtures"
//!
//! [logging]
//! format = "json"
//! filter = "recognizers_datetime=debug"
//! file = "/var/log/recognizers.log"
//! ```

use crate::services::{DEFAULT_LOCALE, FactoryKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default locale.
pub const ENV_LOCALE: &str = "RECOGNIZERS_LOCALE";
/// Environment variable overriding the default factory kind.
pub const ENV_FACTORY: &str = "RECOGNIZERS_FACTORY";
/// Environment variable overriding the fixture directory.
pub const ENV_FIXTURE_DIR: &str = "RECOGNIZERS_FIXTURE_DIR";

const CONFIG_DIR_NAME: &str = "recognizers-datetime";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Locale used when a request names none.
    pub default_locale: String,
    /// Factory used when a request names none.
    pub default_factory: FactoryKind,
    /// Directory holding `<locale>.json` recorded engine output.
    pub fixture_dir: PathBuf,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// `EnvFilter` directive, e.g. `info` or `recognizers_datetime=debug`.
    pub filter: Option<String>,
    /// Log file; stderr when absent.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default locale.
    pub default_locale: Option<String>,
    /// Default factory kind.
    pub default_factory: Option<String>,
    /// Fixture directory.
    pub fixture_dir: Option<String>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            default_factory: FactoryKind::default(),
            fixture_dir: PathBuf::from("fixtures"),
            logging: LoggingSettings::default(),
        }
    }
}

impl RecognizerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown factory kind.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Self::from_config_file(file)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the platform config dir, then `~/.config/recognizers-datetime/`.
    /// Returns defaults if no readable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs
                .config_dir()
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
            base_dirs
                .home_dir()
                .join(".config")
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        ];

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                },
            }
        }

        Self::default()
    }

    /// Applies `RECOGNIZERS_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if `RECOGNIZERS_FACTORY` names an
    /// unknown factory kind.
    pub fn apply_env_overrides(&mut self) -> crate::Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> crate::Result<()> {
        if let Some(locale) = lookup(ENV_LOCALE).filter(|v| !v.trim().is_empty()) {
            self.default_locale = locale.trim().to_string();
        }
        if let Some(factory) = lookup(ENV_FACTORY).filter(|v| !v.trim().is_empty()) {
            self.default_factory = FactoryKind::parse(&factory)?;
        }
        if let Some(dir) = lookup(ENV_FIXTURE_DIR).filter(|v| !v.trim().is_empty()) {
            self.fixture_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Converts a `ConfigFile` to `RecognizerConfig`.
    fn from_config_file(file: ConfigFile) -> crate::Result<Self> {
        let mut config = Self::default();

        if let Some(locale) = file.default_locale {
            config.default_locale = locale;
        }
        if let Some(factory) = file.default_factory {
            config.default_factory = FactoryKind::parse(&factory)?;
        }
        if let Some(dir) = file.fixture_dir {
            config.fixture_dir = PathBuf::from(dir);
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        Ok(config)
    }

    /// Sets the default locale.
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Sets the fixture directory.
    #[must_use]
    pub fn with_fixture_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture_dir = path.into();
        self
    }
}
