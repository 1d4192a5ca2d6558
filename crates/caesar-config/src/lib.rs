//! # caesar-config
//!
//! Layered configuration loading for the caesar CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CAESAR_*` prefix, `__` as separator)
//! 2. Project-level `.caesar/config.toml`
//! 3. User-level `~/.config/caesar/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CAESAR_API_KEY` -> `api_key` and `CAESAR_API__BASE_URL` -> `api.base_url`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use caesar_config::CaesarConfig;
//!
//! let config = CaesarConfig::load_with_dotenv().expect("config");
//! let key = config.require_api_key().expect("CAESAR_API_KEY must be set");
//! println!("talking to {}", config.api.base_url);
//! # let _ = key;
//! ```

mod api;
mod error;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "CAESAR_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CaesarConfig {
    /// Bearer token sent with every request.
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api: ApiConfig,
}

impl CaesarConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if the base URL is not an http(s) URL.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".caesar/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CAESAR_").split("__"))
    }

    /// Return the API key, or [`ConfigError::MissingApiKey`] when it is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key was configured.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(key)
    }

    /// Check field values that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-http base URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.api.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{base}'"),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("caesar").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key() {
        let config = CaesarConfig::default();
        assert!(matches!(
            config.require_api_key(),
            Err(ConfigError::MissingApiKey)
        ));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn whitespace_key_counts_as_missing() {
        let config = CaesarConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn key_is_trimmed() {
        let config = CaesarConfig {
            api_key: " sk-test \n".into(),
            ..Default::default()
        };
        assert_eq!(config.require_api_key().unwrap(), "sk-test");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = CaesarConfig::default();
        config.api.base_url = "ftp://example.com".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.base_url"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = CaesarConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
