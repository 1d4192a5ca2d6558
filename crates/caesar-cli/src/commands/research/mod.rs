mod create;
mod events;
mod get;
mod source;
mod watch;

use std::io::Write;

use crate::cli::subcommands::ResearchCommands;
use crate::context::AppContext;
use crate::output::Output;

/// Handle `caesar research`.
pub async fn handle<W: Write>(
    action: &ResearchCommands,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    match action {
        ResearchCommands::Create(args) => create::run(args, ctx, out).await,
        ResearchCommands::Get { id } => get::run(id, ctx, out).await,
        ResearchCommands::Events { id } => events::run(id, ctx, out).await,
        ResearchCommands::Watch { id } => watch::run(id, ctx, out).await,
        ResearchCommands::Source {
            id,
            result_id,
            content_format,
        } => source::run(id, result_id, content_format.as_deref(), ctx, out).await,
    }
}
