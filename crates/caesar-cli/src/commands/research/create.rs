use std::io::Write;

use caesar_client::CreateResearchRequest;

use super::watch::follow;
use crate::cli::subcommands::ResearchCreateArgs;
use crate::context::AppContext;
use crate::output::Output;

pub async fn run<W: Write>(
    args: &ResearchCreateArgs,
    ctx: &AppContext,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let created = ctx.client.create_research(&build_request(args)).await?;
    tracing::info!(research_id = %created.id, status = %created.status, "research job created");

    if args.no_wait {
        return out.json(&created);
    }
    follow(&created.id, ctx, out).await
}

fn build_request(args: &ResearchCreateArgs) -> CreateResearchRequest {
    CreateResearchRequest {
        brainstorm_session_id: args.brainstorm.clone().unwrap_or_default(),
        answers: args.answers.clone(),
        files: args.files.clone(),
        collection_ids: args.collections.clone(),
        reasoning_loops: args.loops,
        source_timeout: args.source_timeout.unwrap_or_default(),
        reasoning_mode: args.reasoning,
        allow_early_exit: args.allow_early_exit,
        exclude_social: args.exclude_social,
        excluded_domains: args.exclude_domains.clone(),
        auto: args.auto,
        system_prompt: args.system_prompt.clone().unwrap_or_default(),
        model: args.model.clone().unwrap_or_default(),
        ..CreateResearchRequest::new(args.query.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::test_support::{MockContext, MockServer, Reply, run};

    #[tokio::test]
    async fn no_wait_prints_creation_response_without_polling() {
        let server =
            MockServer::start(|_| Reply::json(&json!({ "id": "res-99", "status": "queued" })));
        let ctx = server.context();

        let (result, out) = run(
            &ctx,
            &["research", "create", "my research question", "--no-wait"],
        )
        .await;

        result.expect("create succeeds");
        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].json()["query"], "my research question");
        assert!(out.contains("res-99"));
        assert!(out.contains("\"status\": \"queued\""));
    }

    #[tokio::test]
    async fn default_waits_for_completion() {
        let server = MockServer::start(|req| {
            if req.method == "POST" {
                Reply::json(&json!({ "id": "res-99", "status": "queued" }))
            } else if req.path.ends_with("/events") {
                Reply::json(&json!([]))
            } else {
                Reply::json(&json!({ "id": "res-99", "status": "completed", "content": "final answer" }))
            }
        });
        let ctx = server.context();

        let (result, out) = run(&ctx, &["research", "create", "my question"]).await;

        result.expect("create succeeds");
        assert!(out.contains("completed"), "{out}");
        assert!(out.contains("final answer"), "{out}");
        let paths: Vec<_> = server.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, ["/research", "/research/res-99", "/research/res-99/events"]);
    }

    #[tokio::test]
    async fn flags_are_mapped_onto_request_body() {
        let server =
            MockServer::start(|_| Reply::json(&json!({ "id": "res-100", "status": "queued" })));
        let ctx = server.context();

        let (result, _) = run(
            &ctx,
            &[
                "research",
                "create",
                "query",
                "--model",
                "gpt-5.2",
                "--loops",
                "5",
                "--reasoning",
                "--exclude-domain",
                "reddit.com",
                "--brainstorm",
                "bs-1",
                "--answer",
                "q1=residential",
                "--no-wait",
            ],
        )
        .await;

        result.expect("create succeeds");
        assert_eq!(
            server.requests()[0].json(),
            json!({
                "query": "query",
                "brainstorm_session_id": "bs-1",
                "answers": [{ "question_id": "q1", "answer": "residential" }],
                "reasoning_loops": 5,
                "reasoning_mode": true,
                "excluded_domains": ["reddit.com"],
                "model": "gpt-5.2"
            })
        );
    }

    #[tokio::test]
    async fn api_error_is_propagated_with_body() {
        let server = MockServer::start(|_| Reply::status(401, r#"{"error":"invalid api key"}"#));
        let ctx = server.context();

        let (result, out) = run(&ctx, &["research", "create", "q"]).await;

        let err = result.expect_err("unauthorized");
        assert!(err.to_string().contains(r#"{"error":"invalid api key"}"#));
        assert!(out.is_empty());
    }
}
