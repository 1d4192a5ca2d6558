//! File collections.

use crate::types::CreateCollectionRequest;
use crate::{CaesarClient, Collection, error::ClientError};

impl CaesarClient {
    /// Create a named collection. A blank `description` is left out of the body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a status
    /// of 400 or above, or the response cannot be decoded.
    pub async fn create_collection(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Collection, ClientError> {
        self.post_json(
            "/research/collections",
            &CreateCollectionRequest::new(name, description),
        )
        .await
    }
}
