//! Request and response records mirroring the research API's JSON shapes.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Status strings the API is known to return.
///
/// Status fields stay plain strings: the server may introduce new
/// intermediate values, and those must not break decoding.
pub mod status {
    pub const QUEUED: &str = "queued";
    pub const SEARCHING: &str = "searching";
    pub const ANALYZING: &str = "analyzing";
    pub const COMPLETED: &str = "completed";
    pub const FAILED: &str = "failed";
    /// Chat messages only.
    pub const PROCESSING: &str = "processing";

    /// Whether `value` is one of the documented research job statuses.
    #[must_use]
    pub fn is_known_research_status(value: &str) -> bool {
        matches!(value, QUEUED | SEARCHING | ANALYZING | COMPLETED | FAILED)
    }
}

/// Server timestamp, kept in the offset it was sent with.
pub type Timestamp = DateTime<FixedOffset>;

/// Decode `null` as the type's default (the API sends `null` for empty lists).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

const fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

// ── Research ───────────────────────────────────────────────────────

/// Body of `POST /research`. Unset optional fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResearchRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brainstorm_session_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collection_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub reasoning_loops: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub source_timeout: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reasoning_mode: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_early_exit: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_social: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_domains: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub auto: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub system_prompt: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
}

impl CreateResearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// An answer to one brainstorm question, submitted with a research request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResearchResponse {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// Snapshot of a research job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchObject {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: Timestamp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    /// Absent until the job completes.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub transformed_content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasoning_loops_consumed: u32,
    /// Seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub running_time: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ResearchResult>,
}

impl ResearchObject {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == status::COMPLETED
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == status::FAILED
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_completed() || self.is_failed()
    }
}

/// A cited source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResult {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub citation_index: u32,
}

/// A timestamped progress message of a research job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: Timestamp,
}

impl fmt::Display for ResearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.created_at.format("%H:%M:%S"), self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

// ── Brainstorm ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainstormSession {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<BrainstormQuestion>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: Timestamp,
}

/// A clarifying question; `options` maps an option key to its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainstormQuestion {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: BTreeMap<String, String>,
}

// ── Chat ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<ResearchResult>,
}

impl ChatMessage {
    /// Anything other than `processing` counts as finished.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.status == status::PROCESSING
    }
}

// ── Collections ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: Timestamp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: Timestamp,
}

/// Body of `POST /research/collections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CreateCollectionRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

impl<'a> CreateCollectionRequest<'a> {
    /// Blank descriptions are dropped so the server sees "no description".
    pub fn new(name: &'a str, description: Option<&'a str>) -> Self {
        Self {
            name,
            description: description.filter(|d| !d.trim().is_empty()),
        }
    }
}
