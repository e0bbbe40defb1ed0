//! Launch command handler

use anyhow::{Result, bail};
use colored::*;
use sentinex_launchpad::{LaunchpadOrchestrator, RunOutcome};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::render::TerminalSink;

/// Runs the launch pipeline once and fails when it did not complete
pub async fn handle_launch(prompt: &str, config: &Config) -> Result<()> {
    let (launchpad, repository) = super::repository(config)?;
    let orchestrator = LaunchpadOrchestrator::with_sink(
        repository,
        launchpad.launch_settings(),
        Arc::new(TerminalSink::launchpad()),
    );
    let settings = orchestrator.settings();
    info!(
        "Launching on {} (minting {}% of supply)",
        settings.network.display_name,
        settings.mint_fraction.as_percent()
    );

    match orchestrator.run(prompt).await {
        RunOutcome::Completed(report) => {
            println!();
            println!(
                "{} {} deployed at {}",
                "✓".green(),
                report.token.symbol.bold(),
                report.contract.address.cyan()
            );
            Ok(())
        }
        RunOutcome::Skipped => bail!("Prompt is empty"),
        RunOutcome::Rejected => bail!("Launch rejected"),
        RunOutcome::Failed { step } => bail!("Launch failed at the {} step", step),
    }
}
