use caesar_client::Answer;
use clap::{Args, Subcommand};

/// Research job commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResearchCommands {
    /// Create a research job and wait for it (unless --no-wait).
    Create(ResearchCreateArgs),
    /// Get a research job by ID.
    Get { id: String },
    /// Get the events of a research job.
    Events { id: String },
    /// Poll a research job until completion, printing events.
    Watch { id: String },
    /// Fetch the retrieved content of one cited source.
    Source {
        id: String,
        result_id: String,
        /// Content format requested from the API (e.g. markdown).
        #[arg(long = "content-format")]
        content_format: Option<String>,
    },
}

/// Arguments for `caesar research create`.
#[derive(Clone, Debug, Args)]
pub struct ResearchCreateArgs {
    pub query: String,
    /// Maximum reasoning loops.
    #[arg(long, default_value_t = 1)]
    pub loops: u32,
    /// Enable reasoning mode.
    #[arg(long)]
    pub reasoning: bool,
    /// Let the server configure the job from the query.
    #[arg(long)]
    pub auto: bool,
    /// Exclude social media sources.
    #[arg(long)]
    pub exclude_social: bool,
    /// Model to use (gpt-5.2, gemini-3-pro, gemini-3-flash, claude-opus-4.5).
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub system_prompt: Option<String>,
    /// Domains to exclude (repeatable or comma-separated).
    #[arg(long = "exclude-domain", value_delimiter = ',')]
    pub exclude_domains: Vec<String>,
    /// Brainstorm session ID to build on.
    #[arg(long)]
    pub brainstorm: Option<String>,
    /// Brainstorm answer as QUESTION_ID=ANSWER (repeatable).
    #[arg(long = "answer", value_parser = parse_answer)]
    pub answers: Vec<Answer>,
    /// File ID to include (repeatable).
    #[arg(long = "file")]
    pub files: Vec<String>,
    /// Collection ID to include (repeatable or comma-separated).
    #[arg(long = "collection", value_delimiter = ',')]
    pub collections: Vec<String>,
    /// Per-source fetch timeout in seconds.
    #[arg(long)]
    pub source_timeout: Option<u32>,
    #[arg(long)]
    pub allow_early_exit: bool,
    /// Return immediately without waiting for completion.
    #[arg(long)]
    pub no_wait: bool,
}

fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (question_id, answer) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION_ID=ANSWER, got '{raw}'"))?;
    let question_id = question_id.trim();
    if question_id.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }
    Ok(Answer {
        question_id: question_id.to_string(),
        answer: answer.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_answer;

    #[test]
    fn answer_splits_on_first_equals() {
        let answer = parse_answer("q2=a=b").expect("parses");
        assert_eq!(answer.question_id, "q2");
        assert_eq!(answer.answer, "a=b");
    }

    #[test]
    fn answer_requires_question_id() {
        assert!(parse_answer("=yes").is_err());
        assert!(parse_answer("yes").is_err());
    }
}
