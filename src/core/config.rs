//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::errors::{Result, TranslationError};

/// Production endpoint used when no URL is configured
pub const DEFAULT_API_URL: &str = "http://api.yarakuzen.com";

/// Five minutes
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

/// Configuration for the translate client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent as `authKey`
    pub api_key: String,
    /// Translate endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the default timeout
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Override the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Load configuration from environment variables
    ///
    /// `YARAKU_API_KEY` is required. `YARAKU_API_URL` and
    /// `YARAKU_TIMEOUT_MS` fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), None)
    }

    /// Load from environment variables, with `api_key` standing in for a
    /// missing `YARAKU_API_KEY`
    pub fn from_env_with_key(api_key: Option<&str>) -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), api_key)
    }

    pub(crate) fn from_lookup<F>(lookup: F, api_key: Option<&str>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match api_key {
            Some(key) => key.to_string(),
            None => lookup("YARAKU_API_KEY").ok_or_else(|| TranslationError::ConfigError {
                message: "YARAKU_API_KEY environment variable is required".to_string(),
            })?,
        };

        let api_url = lookup("YARAKU_API_URL").unwrap_or_else(default_api_url);

        let timeout_ms = match lookup("YARAKU_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| TranslationError::ConfigError {
                    message: format!("YARAKU_TIMEOUT_MS must be an integer: {}", e),
                })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_key,
            api_url,
            timeout_ms,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API key is required".to_string(),
            });
        }

        if self.api_url.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API URL is required".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
