//! Chat command handler

use anyhow::{Result, bail};
use sentinex_launchpad::{ChatOutcome, ChatService};
use std::sync::Arc;

use crate::config::Config;
use crate::render::TerminalSink;

/// Sends one prompt to the chat agent and prints the reply
pub async fn handle_chat(prompt: &str, config: &Config) -> Result<()> {
    let (_, repository) = super::repository(config)?;
    let chat = ChatService::with_sink(repository, Arc::new(TerminalSink::chat()));

    match chat.send(prompt).await {
        ChatOutcome::Replied(_) => Ok(()),
        ChatOutcome::Skipped => bail!("Prompt is empty"),
        ChatOutcome::Failed => bail!("Chat request failed"),
    }
}
