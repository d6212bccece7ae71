//! Structured logging and secret-scrubbing utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing a helper that keeps
//! Google API keys out of log sinks.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};
use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Google API keys: `AIza` followed by 35 URL-safe characters.
static API_KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn api_key_regex() -> &'static Regex {
    API_KEY_REGEX.get_or_init(|| {
        Regex::new(r"AIza[0-9A-Za-z_\-]{35}").expect("Invalid regex pattern")
    })
}

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line output.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Logs go to stderr so CLI output on stdout stays clean. Log levels are
/// controlled via the `RUST_LOG` environment variable or the provided
/// `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).json())
            .try_init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).compact())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).pretty())
            .try_init(),
    };

    installed.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
}

/// Replaces every Google API key in `input` with `[REDACTED_API_KEY]`.
///
/// Upstream error bodies and request URLs can echo the key back, so anything
/// coming from the Gemini API passes through here before it is logged.
pub fn sanitize(input: &str) -> String {
    api_key_regex()
        .replace_all(input, "[REDACTED_API_KEY]")
        .into_owned()
}

/// Applies [`sanitize`] only when the logging config asks for it.
pub fn scrub(config: &LoggingConfig, input: &str) -> String {
    if config.sanitize_tokens {
        sanitize(input)
    } else {
        input.to_string()
    }
}
