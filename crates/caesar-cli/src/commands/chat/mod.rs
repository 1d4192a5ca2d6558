mod history;
mod send;
mod stream;

use std::io::Write;

use crate::cli::subcommands::ChatCommands;
use crate::context::AppContext;
use crate::output::Output;

/// Handle `caesar chat`.
pub async fn handle<W: Write>(
    action: &ChatCommands,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    match action {
        ChatCommands::Send {
            research_id,
            message,
            no_wait,
        } => send::run(research_id, message, *no_wait, ctx, out).await,
        ChatCommands::History { research_id } => history::run(research_id, ctx, out).await,
        ChatCommands::Stream {
            research_id,
            message_id,
        } => stream::run(research_id, message_id, ctx, out).await,
    }
}
