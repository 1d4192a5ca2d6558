//! # caesar-client
//!
//! Async client for the Caesar research API.
//!
//! Each resource accessor is a direct mapping from typed arguments to one
//! HTTP call and one decode step, with no retries.
//! The only control flow lives in [`poll`], which watches a research job until
//! it reaches a terminal status and emits each progress event exactly once.
//!
//! - [`research`]: create/get jobs, events, source content
//! - [`chat`]: follow-up messages on a completed job
//! - [`brainstorm`]: clarifying-question sessions
//! - [`collections`]: named file groupings

pub mod brainstorm;
pub mod chat;
pub mod collections;
pub mod poll;
pub mod research;
pub mod types;

mod error;
mod http;

pub use chat::ChatStream;
pub use error::ClientError;
pub use poll::PollSettings;
pub use types::*;

use std::time::Duration;

use caesar_config::CaesarConfig;

/// Explicit construction parameters, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Defaults to [`caesar_config::DEFAULT_BASE_URL`] when empty.
    pub base_url: String,
    pub api_key: String,
    /// Defaults to 120 s.
    pub timeout: Option<Duration>,
    /// Reuse an existing client instead of building one.
    pub http: Option<reqwest::Client>,
}

/// HTTP client bound to one API host and key.
#[derive(Debug, Clone)]
pub struct CaesarClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CaesarClient {
    /// Build a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when no API key is configured (before
    /// any network activity), or [`ClientError::Client`] if the HTTP client
    /// cannot be built.
    pub fn from_config(config: &CaesarConfig) -> Result<Self, ClientError> {
        let api_key = config.require_api_key()?;
        Self::with_options(ClientOptions {
            base_url: config.api.normalized_base_url().to_string(),
            api_key: api_key.to_string(),
            timeout: Some(config.api.timeout()),
            http: None,
        })
    }

    /// Build a client from explicit options, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Client`] if the HTTP client cannot be built.
    pub fn with_options(options: ClientOptions) -> Result<Self, ClientError> {
        let http = match options.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .user_agent(concat!("caesar-cli/", env!("CARGO_PKG_VERSION")))
                .timeout(options.timeout.unwrap_or(Duration::from_secs(120)))
                .build()
                .map_err(ClientError::Client)?,
        };

        let base_url = if options.base_url.is_empty() {
            caesar_config::DEFAULT_BASE_URL.to_string()
        } else {
            options.base_url.trim_end_matches('/').to_string()
        };

        Ok(Self {
            http,
            base_url,
            api_key: options.api_key,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_options_defaults_base_url() {
        let client = CaesarClient::with_options(ClientOptions {
            api_key: "k".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.base_url(), caesar_config::DEFAULT_BASE_URL);
    }

    #[test]
    fn with_options_trims_trailing_slash() {
        let client = CaesarClient::with_options(ClientOptions {
            base_url: "http://127.0.0.1:1234/".into(),
            api_key: "k".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn from_config_requires_api_key() {
        let err = CaesarClient::from_config(&CaesarConfig::default()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("CAESAR_API_KEY"));
    }

    #[test]
    fn from_config_with_key() {
        let config = CaesarConfig {
            api_key: "sk-live".into(),
            ..Default::default()
        };
        let client = CaesarClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), caesar_config::DEFAULT_BASE_URL);
    }
}
