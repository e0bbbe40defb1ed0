//! Interactive session
//!
//! Reads prompts from stdin until `/quit` or end of input. `/clear` resets
//! the transcript to its greeting.

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use sentinex_launchpad::{ChatService, LaunchpadOrchestrator};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::config::Config;
use crate::render::TerminalSink;

/// Which view the session drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SessionMode {
    Launchpad,
    Chat,
}

/// A line typed at the session prompt
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Prompt(&'a str),
    Clear,
    Quit,
    Empty,
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Empty,
        "/clear" => Input::Clear,
        "/quit" | "/exit" => Input::Quit,
        prompt => Input::Prompt(prompt),
    }
}

/// Front end for either view
enum View {
    Launchpad(LaunchpadOrchestrator),
    Chat(ChatService),
}

impl View {
    async fn submit(&self, prompt: &str) {
        match self {
            View::Launchpad(orchestrator) => {
                orchestrator.run(prompt).await;
            }
            View::Chat(chat) => {
                chat.send(prompt).await;
            }
        }
    }

    fn clear(&self) {
        match self {
            View::Launchpad(orchestrator) => orchestrator.reset_transcript(),
            View::Chat(chat) => chat.clear(),
        }
    }
}

pub async fn handle_session(mode: SessionMode, config: &Config) -> Result<()> {
    let (launchpad, repository) = super::repository(config)?;

    let view = match mode {
        SessionMode::Launchpad => View::Launchpad(LaunchpadOrchestrator::with_sink(
            repository,
            launchpad.launch_settings(),
            Arc::new(TerminalSink::launchpad()),
        )),
        SessionMode::Chat => View::Chat(ChatService::with_sink(
            repository,
            Arc::new(TerminalSink::chat()),
        )),
    };
    debug!("Starting {:?} session against {}", mode, launchpad.agent_url);

    println!("{}", "Type /clear to start over, /quit to exit.".dimmed());
    view.clear();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "›".cyan().bold());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Clear => view.clear(),
            Input::Empty => {}
            Input::Prompt(prompt) => view.submit(prompt).await,
        }
    }

    Ok(())
}
