//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod chat;
mod launch;
mod session;

pub use session::SessionMode;

use anyhow::Result;
use clap::Subcommand;
use sentinex_launchpad::LaunchpadConfig;
use sentinex_launchpad::repository::HttpAgentRepository;
use std::sync::Arc;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch a token from a natural-language description
    Launch {
        /// e.g. "Create a token named Rocket with symbol RKT and supply of 100000"
        prompt: String,
    },
    /// Ask the DeFi agent a single question
    Chat {
        prompt: String,
    },
    /// Interactive session (/clear resets the transcript, /quit exits)
    Session {
        #[arg(long, value_enum, default_value_t = SessionMode::Launchpad)]
        mode: SessionMode,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Launch { prompt } => launch::handle_launch(&prompt, config).await,
        Commands::Chat { prompt } => chat::handle_chat(&prompt, config).await,
        Commands::Session { mode } => session::handle_session(mode, config).await,
    }
}

/// Builds the HTTP-backed repository shared by every command
fn repository(config: &Config) -> Result<(LaunchpadConfig, Arc<HttpAgentRepository>)> {
    let launchpad = config.launchpad()?;
    let client = launchpad.build_client()?;
    Ok((launchpad, Arc::new(HttpAgentRepository::new(client))))
}
