//! Binary entry point for recognizers-datetime.
//!
//! Recognizes date/time expressions in text using recorded engine output.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use recognizers_datetime::cli::{self, OutputFormat, RecognizeArgs};
use recognizers_datetime::config::RecognizerConfig;
use recognizers_datetime::observability::{self, LoggingConfig};
use recognizers_datetime::{FactoryKind, Shape};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Environment variable naming a config file.
const ENV_CONFIG_PATH: &str = "RECOGNIZERS_CONFIG_PATH";

/// recognizers-datetime - typed date/time recognition.
#[derive(Parser)]
#[command(name = "recognizers-datetime")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Recognize date/time expressions in text.
    Recognize {
        /// The text to scan.
        content: String,

        /// Engine locale (default from config).
        #[arg(short, long)]
        locale: Option<String>,

        /// Value representation: baseline or precise.
        #[arg(long)]
        factory: Option<FactoryKind>,

        /// Reference instant, yyyy-MM-ddTHH:mm:ss.
        #[arg(short, long)]
        reference: Option<String>,

        /// Keep only these shapes (repeatable).
        #[arg(short, long = "shape")]
        shapes: Vec<Shape>,

        /// Directory of recorded engine output (default from config).
        #[arg(long)]
        fixtures: Option<PathBuf>,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the recognized temporal shapes.
    Shapes {
        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let logging = match LoggingConfig::from_settings(Some(&config.logging), cli.verbose) {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Failed to configure logging: {e}");
            return ExitCode::FAILURE;
        },
    };
    if let Err(e) = observability::init(&logging) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: &RecognizerConfig) -> recognizers_datetime::Result<()> {
    match cli.command {
        Commands::Recognize {
            content,
            locale,
            factory,
            reference,
            shapes,
            fixtures,
            format,
        } => cli::cmd_recognize(
            config,
            &RecognizeArgs {
                content,
                locale,
                factory,
                reference,
                shapes,
                fixtures,
                format,
            },
        ),

        Commands::Shapes { format } => cli::cmd_shapes(format),
    }
}

/// Loads configuration: explicit path, then `RECOGNIZERS_CONFIG_PATH`, then the
/// default location, with `RECOGNIZERS_*` overrides applied last.
fn load_config(path: Option<&Path>) -> recognizers_datetime::Result<RecognizerConfig> {
    let env_path = std::env::var(ENV_CONFIG_PATH)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let mut config = match path.map(Path::to_path_buf).or(env_path) {
        Some(config_path) => RecognizerConfig::load_from_file(&config_path)?,
        None => RecognizerConfig::load_default(),
    };
    config.apply_env_overrides()?;
    Ok(config)
}
