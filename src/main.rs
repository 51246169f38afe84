//! Regroup CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use regroup::cli::Cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Search workers loop forever on the blocking pool, so the process must
    // exit explicitly rather than wait for the runtime to drain them.
    match regroup::cli::run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(err) => regroup::cli::handle_error(&err),
    }
}
