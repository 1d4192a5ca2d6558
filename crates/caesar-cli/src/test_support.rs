//! Command runner for handler tests against the mock research API.

use caesar_client::{CaesarClient, ClientOptions, PollSettings};
pub use caesar_testkit::{MockServer, Reply};
use clap::Parser;

use crate::cli::Cli;
use crate::commands::dispatch::dispatch;
use crate::context::AppContext;
use crate::output::Output;

/// Context pointed at a mock server, with polling delays disabled.
pub trait MockContext {
    fn context(&self) -> AppContext;
}

impl MockContext for MockServer {
    fn context(&self) -> AppContext {
        let client = CaesarClient::with_options(ClientOptions {
            base_url: self.url.clone(),
            api_key: "test-key".into(),
            ..Default::default()
        })
        .expect("client builds");
        AppContext::from_parts(client, PollSettings::immediate())
    }
}

/// Parse `argv` (without the binary name), dispatch it, and capture stdout.
pub async fn run(ctx: &AppContext, argv: &[&str]) -> (anyhow::Result<()>, String) {
    let cli = Cli::try_parse_from(std::iter::once("caesar").chain(argv.iter().copied()))
        .expect("argv should parse");
    let mut out = Output::new(Vec::new(), cli.format);
    let result = dispatch(cli.command, ctx, &mut out).await;
    let text = String::from_utf8(out.into_inner()).expect("utf8 output");
    (result, text)
}
