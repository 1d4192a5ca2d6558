use std::io::Write;

use crate::commands::shared::report::write_sources;
use crate::context::AppContext;
use crate::output::Output;
use crate::progress::Progress;

pub async fn run<W: Write>(
    research_id: &str,
    message: &str,
    no_wait: bool,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let created = ctx.client.create_chat_message(research_id, message).await?;
    tracing::info!(research_id, message_id = %created.id, status = %created.status, "chat message created");

    if no_wait {
        return out.json(&created);
    }

    let spinner = Progress::spinner("Waiting for answer...");
    let answer = match ctx
        .client
        .wait_for_chat_message(research_id, created, ctx.poll.chat_interval)
        .await
    {
        Ok(answer) => {
            spinner.finish_clear();
            answer
        }
        Err(error) => {
            spinner.finish_err("chat polling failed");
            return Err(error.into());
        }
    };

    out.line(&answer.content)?;
    write_sources(out, &answer.results)
}
