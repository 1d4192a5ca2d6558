use std::io::Write;

use crate::commands::shared::report::write_research_summary;
use crate::context::AppContext;
use crate::output::Output;

pub async fn run<W: Write>(id: &str, ctx: &AppContext, out: &mut Output<W>) -> anyhow::Result<()> {
    follow(id, ctx, out).await
}

/// Stream a job's events as they arrive, then print the finished job.
///
/// A failed write to the sink ends polling right away.
pub async fn follow<W: Write>(id: &str, ctx: &AppContext, out: &mut Output<W>) -> anyhow::Result<()> {
    let job = ctx
        .client
        .watch_research(id, ctx.poll.research_interval, |event| out.line(event))
        .await?;
    write_research_summary(out, &job)
}
