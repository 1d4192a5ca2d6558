use anyhow::Context;
use caesar_client::{CaesarClient, PollSettings};
use caesar_config::CaesarConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub client: CaesarClient,
    pub poll: PollSettings,
}

impl AppContext {
    /// Build the API client from configuration.
    ///
    /// Fails on a missing API key before any request is made.
    pub fn init(config: &CaesarConfig) -> anyhow::Result<Self> {
        let client = CaesarClient::from_config(config)
            .context("failed to initialize research API client")?;
        tracing::debug!(base_url = client.base_url(), "api client ready");

        Ok(Self::from_parts(client, PollSettings::default()))
    }

    /// Assemble a context from a pre-built client.
    #[must_use]
    pub const fn from_parts(client: CaesarClient, poll: PollSettings) -> Self {
        Self { client, poll }
    }
}
