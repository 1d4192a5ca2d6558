use std::io::Write;

use crate::context::AppContext;
use crate::output::Output;

pub async fn run<W: Write>(
    id: &str,
    result_id: &str,
    format: Option<&str>,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let content = ctx.client.get_result_content(id, result_id, format).await?;
    out.json(&content)
}
