//! Chat follow-ups on a research job.

use reqwest::Method;
use serde::Serialize;

use crate::http::segment;
use crate::{CaesarClient, ChatMessage, error::ClientError};

#[derive(Serialize)]
struct CreateChatMessageRequest<'a> {
    content: &'a str,
}

/// Raw server-sent-events body of a chat message, handed through unparsed.
#[derive(Debug)]
pub struct ChatStream {
    response: reqwest::Response,
}

impl ChatStream {
    /// Next chunk of the body, or `None` once the server closes the stream.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if reading the body fails.
    pub async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, ClientError> {
        let chunk = self
            .response
            .chunk()
            .await
            .map_err(ClientError::Transport)?;
        Ok(chunk.map(|bytes| bytes.to_vec()))
    }
}

impl CaesarClient {
    /// Send a follow-up question. The returned message is usually `processing`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a status
    /// of 400 or above, or the response cannot be decoded.
    pub async fn create_chat_message(
        &self,
        research_id: &str,
        content: &str,
    ) -> Result<ChatMessage, ClientError> {
        self.post_json(
            &format!("/research/{}/chat", segment(research_id)),
            &CreateChatMessageRequest { content },
        )
        .await
    }

    /// List every chat message of a research job.
    ///
    /// # Errors
    ///
    /// See [`Self::create_chat_message`].
    pub async fn get_chat_history(&self, research_id: &str) -> Result<Vec<ChatMessage>, ClientError> {
        self.get_json(&format!("/research/{}/chat", segment(research_id)))
            .await
    }

    /// Fetch one chat message.
    ///
    /// # Errors
    ///
    /// See [`Self::create_chat_message`].
    pub async fn get_chat_message(
        &self,
        research_id: &str,
        message_id: &str,
    ) -> Result<ChatMessage, ClientError> {
        self.get_json(&format!(
            "/research/{}/chat/{}",
            segment(research_id),
            segment(message_id)
        ))
        .await
    }

    /// Open the SSE stream of a chat message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the API returns a
    /// status of 400 or above.
    pub async fn stream_chat_message(
        &self,
        research_id: &str,
        message_id: &str,
    ) -> Result<ChatStream, ClientError> {
        let path = format!(
            "/research/{}/chat/{}/stream",
            segment(research_id),
            segment(message_id)
        );
        let response = self.send::<()>(Method::GET, &path, None).await?;
        Ok(ChatStream { response })
    }
}
