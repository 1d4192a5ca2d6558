use clap::Subcommand;

/// File collection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CollectionCommands {
    /// Create a collection.
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}
