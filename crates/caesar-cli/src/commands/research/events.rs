use std::io::Write;

use crate::context::AppContext;
use crate::output::Output;

pub async fn run<W: Write>(id: &str, ctx: &AppContext, out: &mut Output<W>) -> anyhow::Result<()> {
    let events = ctx.client.get_research_events(id).await?;
    out.json(&events)
}
