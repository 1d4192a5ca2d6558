use clap::Subcommand;

/// Chat follow-up commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Send a follow-up question about a research job.
    Send {
        research_id: String,
        message: String,
        /// Print the created message instead of waiting for the answer.
        #[arg(long)]
        no_wait: bool,
    },
    /// List chat history for a research job.
    History { research_id: String },
    /// Stream a chat message's server-sent events to stdout.
    Stream {
        research_id: String,
        message_id: String,
    },
}
