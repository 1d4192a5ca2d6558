//! Polling loops: research jobs (with event merge) and chat messages.
//!
//! The API has no cursor for events, so every round refetches the whole list
//! and only the suffix past the already-emitted count is forwarded. This is a
//! positional diff: earlier events are assumed to never change position.

use std::collections::HashSet;
use std::time::Duration;

use crate::types::status;
use crate::{CaesarClient, ChatMessage, ResearchEvent, ResearchObject, error::ClientError};

/// Delay between research job polls.
pub const RESEARCH_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Delay between chat message polls.
pub const CHAT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Sleep durations used by the polling loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub research_interval: Duration,
    pub chat_interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            research_interval: RESEARCH_POLL_INTERVAL,
            chat_interval: CHAT_POLL_INTERVAL,
        }
    }
}

impl PollSettings {
    /// No sleeping between polls.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            research_interval: Duration::ZERO,
            chat_interval: Duration::ZERO,
        }
    }
}

impl CaesarClient {
    /// Poll a research job until it completes, calling `on_event` once for
    /// every new progress event in arrival order.
    ///
    /// Returns the final job snapshot when its status is `completed`. Any
    /// status other than `completed` or `failed` keeps the loop running, so a
    /// job that never terminates is polled forever.
    ///
    /// # Errors
    ///
    /// - [`ClientError::JobFailed`] when the job reaches `failed`.
    /// - Any error from fetching the job status aborts immediately.
    /// - An error returned by `on_event` stops polling and is returned as is.
    ///
    /// Errors from the event fetch do not abort: that round simply emits
    /// nothing and the failure is logged.
    pub async fn watch_research<F, E>(
        &self,
        id: &str,
        interval: Duration,
        mut on_event: F,
    ) -> Result<ResearchObject, E>
    where
        F: FnMut(&ResearchEvent) -> Result<(), E>,
        E: From<ClientError>,
    {
        let mut seen = 0usize;
        let mut unknown_statuses = HashSet::new();

        loop {
            let job = self.get_research(id).await?;

            match self.get_research_events(id).await {
                Ok(events) => seen = emit_new(&events, seen, &mut on_event)?,
                Err(error) => {
                    tracing::warn!(research_id = id, %error, "event fetch failed; no new events this round");
                }
            }

            if job.is_completed() {
                return Ok(job);
            }
            if job.is_failed() {
                return Err(ClientError::JobFailed { id: id.to_string() }.into());
            }

            if !status::is_known_research_status(&job.status)
                && unknown_statuses.insert(job.status.clone())
            {
                tracing::warn!(
                    research_id = id,
                    status = %job.status,
                    "unrecognized research status; treating as still running"
                );
            }
            tracing::debug!(research_id = id, status = %job.status, seen, "research still running");

            tokio::time::sleep(interval).await;
        }
    }

    /// Poll a chat message until its status leaves `processing`.
    ///
    /// Any other status, including unrecognized ones, ends the loop.
    ///
    /// # Errors
    ///
    /// Any fetch error aborts the loop.
    pub async fn wait_for_chat_message(
        &self,
        research_id: &str,
        mut message: ChatMessage,
        interval: Duration,
    ) -> Result<ChatMessage, ClientError> {
        while message.is_processing() {
            tokio::time::sleep(interval).await;
            message = self.get_chat_message(research_id, &message.id).await?;
            tracing::debug!(research_id, message_id = %message.id, status = %message.status, "polled chat message");
        }
        Ok(message)
    }
}

/// Forward `events[seen..]` and return the new emitted count.
fn emit_new<F, E>(events: &[ResearchEvent], seen: usize, on_event: &mut F) -> Result<usize, E>
where
    F: FnMut(&ResearchEvent) -> Result<(), E>,
{
    if events.len() <= seen {
        return Ok(seen);
    }
    for event in &events[seen..] {
        on_event(event)?;
    }
    Ok(events.len())
}
