use std::io::Write;

use crate::cli::subcommands::CollectionCommands;
use crate::context::AppContext;
use crate::output::Output;

/// Handle `caesar collections`.
pub async fn handle<W: Write>(
    action: &CollectionCommands,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    match action {
        CollectionCommands::Create { name, description } => {
            let collection = ctx
                .client
                .create_collection(name, description.as_deref())
                .await?;
            out.json(&collection)
        }
    }
}
