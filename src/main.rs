//! # Tryout - command-line entry point
//!
//! Resolves the API base URL (flag, then `TRYOUT_API_URL`, then the local
//! default), builds the HTTP client and dispatches one command.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tryout::cli::Cli;
use tryout::commands::execute_command;
use tryout::http::HttpApi;
use tryout_core::ApiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ApiConfig::from_value(cli.api_url.as_deref())
        .context("API base URL is not usable. Check --api-url or TRYOUT_API_URL")?;
    debug!(base_url = config.base_url(), "using tryout API");

    let api = HttpApi::new(config);
    execute_command(&api, cli.command).await
}

/// Initialize tracing subscriber with environment filter.
///
/// Logs go to stderr so command output stays pipeable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
