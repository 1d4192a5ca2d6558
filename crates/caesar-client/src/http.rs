//! Request construction and response classification shared by every accessor.
//!
//! All traffic goes through [`CaesarClient::send`], which attaches the bearer
//! token, sets `Content-Type` only when a JSON body is present, and turns any
//! status of 400 or above into [`ClientError::Api`] carrying the raw body.

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{CaesarClient, error::ClientError};

impl CaesarClient {
    /// Issue one request and return the checked response.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.api_key);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(ClientError::Encode)?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let request = builder.build().map_err(ClientError::Request)?;
        let resp = self
            .http
            .execute(request)
            .await
            .map_err(ClientError::Transport)?;

        tracing::debug!(%method, path, status = resp.status().as_u16(), "caesar api request");
        check_response(resp).await
    }

    /// `GET` without a body, decoding the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.send::<()>(Method::GET, path, None).await?;
        decode(resp, path).await
    }

    /// `POST` with a JSON body, decoding the JSON response.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.send(Method::POST, path, Some(body)).await?;
        decode(resp, path).await
    }
}

/// Map any status of 400 or above to [`ClientError::Api`] with the full body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    path: &str,
) -> Result<T, ClientError> {
    let bytes = resp.bytes().await.map_err(ClientError::Transport)?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Percent-encode a caller-supplied identifier for use as one path segment.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_keeps_raw_body() {
        let resp = mock_response(422, r#"{"error":"query too short"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, r#"{"error":"query too short"}"#);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(503, "upstream unavailable");
        let err = check_response(resp).await.unwrap_err();
        assert!(err.to_string().contains("upstream unavailable"));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn decode_error_names_path() {
        let resp = mock_response(200, "not json");
        let err = decode::<serde_json::Value>(resp, "/research/r1")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode { ref path, .. } if path == "/research/r1"));
    }

    #[test]
    fn segment_escapes_separators() {
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
        assert_eq!(segment("res-123"), "res-123");
    }
}
