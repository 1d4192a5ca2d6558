use anyhow::Context;
use caesar_config::CaesarConfig;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("caesar error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    ui::init(&flags);

    let config = CaesarConfig::load_with_dotenv().context("failed to load caesar configuration")?;
    let ctx = context::AppContext::init(&config)?;

    let mut out = output::Output::stdout(flags.format);
    commands::dispatch::dispatch(cli.command, &ctx, &mut out).await
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CAESAR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
