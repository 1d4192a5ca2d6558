//! Brainstorm sessions.

use serde::Serialize;

use crate::{BrainstormSession, CaesarClient, error::ClientError};

#[derive(Serialize)]
struct CreateBrainstormRequest<'a> {
    query: &'a str,
}

impl CaesarClient {
    /// Ask the server for clarifying questions about `query`.
    ///
    /// The session id can then be passed as `brainstorm_session_id` when
    /// creating a research job, together with answers to the questions.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a status
    /// of 400 or above, or the response cannot be decoded.
    pub async fn create_brainstorm(&self, query: &str) -> Result<BrainstormSession, ClientError> {
        self.post_json("/research/brainstorm", &CreateBrainstormRequest { query })
            .await
    }
}
