use std::io::Write;

use crate::cli::root_commands::BrainstormArgs;
use crate::context::AppContext;
use crate::output::Output;

/// Handle `caesar brainstorm`.
pub async fn handle<W: Write>(
    args: &BrainstormArgs,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let session = ctx.client.create_brainstorm(&args.query).await?;
    tracing::debug!(session_id = %session.id, questions = session.questions.len(), "brainstorm session created");
    out.json(&session)
}
