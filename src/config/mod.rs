// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Legacy variable the API key is read from when the config leaves it unset.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (`TRANSLINGUA__SECTION__KEY`, highest)
    /// 2. Config file (`path`, or `~/.translingua/config.toml` if present)
    /// 3. Defaults (lowest)
    ///
    /// The API key then falls back to `GOOGLE_API_KEY`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("TRANSLINGUA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(config.with_api_key_fallback(std::env::var(API_KEY_ENV).ok()))
    }

    /// Fill in the API key from `fallback` when the configuration has none.
    pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
        if self.gemini.api_key.is_none() {
            self.gemini.api_key = fallback.and_then(ApiKey::new);
        }
        self
    }

    /// The configured API key, or a configuration error naming where to set it.
    pub fn require_api_key(&self) -> Result<&ApiKey> {
        self.gemini.api_key.as_ref().ok_or_else(|| {
            AppError::Config(format!(
                "Google API key not found. Set {} in your environment or .env file \
                 (get one at https://makersuite.google.com/app/apikey).",
                API_KEY_ENV
            ))
        })
    }

    /// Render the effective configuration as TOML. The API key is redacted.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::Internal(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".translingua")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
