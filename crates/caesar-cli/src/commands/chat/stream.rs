use std::io::Write;

use crate::context::AppContext;
use crate::output::Output;

/// Copy the SSE body to stdout chunk by chunk, without parsing it.
pub async fn run<W: Write>(
    research_id: &str,
    message_id: &str,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let mut stream = ctx
        .client
        .stream_chat_message(research_id, message_id)
        .await?;
    let mut total = 0usize;
    while let Some(chunk) = stream.next_chunk().await? {
        total += chunk.len();
        out.raw(&chunk)?;
    }
    tracing::debug!(research_id, message_id, bytes = total, "chat stream closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::{MockContext, MockServer, Reply, run};

    const BODY: &str = "event: token\ndata: {\"text\":\"He\"}\n\nevent: token\ndata: {\"text\":\"at\"}\n\n";

    #[tokio::test]
    async fn body_is_passed_through_verbatim() {
        let server = MockServer::start(|_| Reply::status(200, BODY));
        let ctx = server.context();

        let (result, out) = run(&ctx, &["chat", "stream", "r1", "m1"]).await;

        result.expect("stream succeeds");
        assert_eq!(out, BODY);
        assert_eq!(server.requests()[0].path, "/research/r1/chat/m1/stream");
    }

    #[tokio::test]
    async fn error_status_prints_nothing() {
        let server = MockServer::start(|_| Reply::status(404, "no such message"));
        let ctx = server.context();

        let (result, out) = run(&ctx, &["chat", "stream", "r1", "missing"]).await;

        let err = result.expect_err("404 should fail");
        assert!(err.to_string().contains("404"));
        assert!(out.is_empty());
    }
}
