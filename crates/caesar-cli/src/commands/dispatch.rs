use std::io::Write;

use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;
use crate::output::Output;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch<W: Write>(
    command: Commands,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    match command {
        Commands::Research { action } => commands::research::handle(&action, ctx, out).await,
        Commands::Chat { action } => commands::chat::handle(&action, ctx, out).await,
        Commands::Brainstorm(args) => commands::brainstorm::handle(&args, ctx, out).await,
        Commands::Collections { action } => commands::collections::handle(&action, ctx, out).await,
    }
}
