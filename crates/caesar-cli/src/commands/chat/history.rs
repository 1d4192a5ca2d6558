use std::io::Write;

use crate::context::AppContext;
use crate::output::Output;

pub async fn run<W: Write>(
    research_id: &str,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let messages = ctx.client.get_chat_history(research_id).await?;
    out.json(&messages)
}
