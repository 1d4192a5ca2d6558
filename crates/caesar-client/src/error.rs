//! Client error types.

use caesar_config::ConfigError;
use thiserror::Error;

/// Errors that can occur when talking to the research API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration was incomplete (e.g. no API key). Raised before any request.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The underlying HTTP client could not be constructed.
    #[error("build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request body could not be serialized.
    #[error("marshal request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request could not be assembled (bad URL, bad header).
    #[error("create request: {0}")]
    Request(#[source] reqwest::Error),

    /// The request was sent but no usable response came back.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// API returned a status code of 400 or above.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Raw response body, verbatim.
        body: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("decode response from {path}: {source}")]
    Decode {
        /// Request path the body came from.
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A polled research job reached the `failed` status.
    #[error("research job {id} failed")]
    JobFailed {
        /// Research job identifier.
        id: String,
    },
}

impl ClientError {
    /// True for errors raised before any network activity.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
