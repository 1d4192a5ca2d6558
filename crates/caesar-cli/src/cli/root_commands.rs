use clap::{Args, Subcommand};

use crate::cli::subcommands::{ChatCommands, CollectionCommands, ResearchCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Research jobs.
    Research {
        #[command(subcommand)]
        action: ResearchCommands,
    },
    /// Follow-up chat on a research job.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Generate clarifying questions for a query.
    Brainstorm(BrainstormArgs),
    /// File collections.
    Collections {
        #[command(subcommand)]
        action: CollectionCommands,
    },
}

/// Arguments for `caesar brainstorm`.
#[derive(Clone, Debug, Args)]
pub struct BrainstormArgs {
    /// Research question to refine.
    pub query: String,
}
