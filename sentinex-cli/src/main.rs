//! Sentinex CLI
//!
//! Terminal front end for the social launchpad and the DeFi chat agent.

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sentinex")]
#[command(about = "Sentinex DeFi assistant and social token launchpad", long_about = None)]
struct Cli {
    /// Agent URL [env: SENTINEX_AGENT_URL, default: http://localhost:5001]
    #[arg(long)]
    agent_url: Option<String>,

    /// Token service URL, deploy and mint go there when set [env: SENTINEX_TOKEN_SERVICE_URL]
    #[arg(long)]
    token_service_url: Option<String>,

    /// Deployment network, taurus or secret [env: SENTINEX_NETWORK, default: taurus]
    #[arg(long)]
    network: Option<String>,

    /// Share of the requested supply minted to the owner, e.g. 0.5 or 5% [env: SENTINEX_MINT_FRACTION]
    #[arg(long)]
    mint_fraction: Option<String>,

    /// Owner address used when the prompt does not name one [env: SENTINEX_OWNER]
    #[arg(long)]
    owner: Option<String>,

    /// Request timeout in seconds [env: SENTINEX_REQUEST_TIMEOUT]
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentinex_cli=info,sentinex_launchpad=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        agent_url: cli.agent_url,
        token_service_url: cli.token_service_url,
        network: cli.network,
        mint_fraction: cli.mint_fraction,
        owner: cli.owner,
        timeout_secs: cli.timeout,
    };

    handle_command(cli.command, &config).await
}
