//! Research job accessors.

use crate::http::segment;
use crate::{
    CaesarClient, CreateResearchRequest, CreateResearchResponse, ResearchEvent, ResearchObject,
    ResultContent, error::ClientError,
};

impl CaesarClient {
    /// Start a new research job.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a status
    /// of 400 or above, or the response cannot be decoded.
    pub async fn create_research(
        &self,
        req: &CreateResearchRequest,
    ) -> Result<CreateResearchResponse, ClientError> {
        self.post_json("/research", req).await
    }

    /// Fetch the current snapshot of a research job.
    ///
    /// # Errors
    ///
    /// See [`Self::create_research`].
    pub async fn get_research(&self, id: &str) -> Result<ResearchObject, ClientError> {
        self.get_json(&format!("/research/{}", segment(id))).await
    }

    /// Fetch the full, ordered event list of a research job.
    ///
    /// # Errors
    ///
    /// See [`Self::create_research`].
    pub async fn get_research_events(&self, id: &str) -> Result<Vec<ResearchEvent>, ClientError> {
        self.get_json(&format!("/research/{}/events", segment(id)))
            .await
    }

    /// Fetch the retrieved content of one cited source.
    ///
    /// `format` is appended as `?format=` only when non-empty.
    ///
    /// # Errors
    ///
    /// See [`Self::create_research`].
    pub async fn get_result_content(
        &self,
        research_id: &str,
        result_id: &str,
        format: Option<&str>,
    ) -> Result<ResultContent, ClientError> {
        let mut path = format!(
            "/research/{}/results/{}/content",
            segment(research_id),
            segment(result_id)
        );
        if let Some(format) = format.filter(|f| !f.is_empty()) {
            path.push_str("?format=");
            path.push_str(&urlencoding::encode(format));
        }
        self.get_json(&path).await
    }
}
